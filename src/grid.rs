use tracing::trace;

use crate::cells::{Cartesian2DCoordinate, Cell, CompassPrimary, CoordinateSmallVec};
use crate::errors::*;
use crate::grid_iterators::{CellIter, RowIter};
use crate::random::RandomSource;
use crate::units::{Height, Width};

/// A fixed `width * height` array of cells, each bounded by four walls.
///
/// Cells are stored in row-major order. The shape never changes after construction; only the
/// wall flags are mutated, and only through `carve_passage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: Width,
    height: Height,
    cells: Vec<Cell>,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellLinkError {
    InvalidGridCoordinate,
    SelfLink,
    NotAdjacent,
}

impl Grid {
    /// Build a grid with every wall of every cell intact.
    ///
    /// Both dimensions must be at least 1 and every coordinate must fit in a `u32`.
    pub fn new(width: Width, height: Height) -> Result<Grid> {
        let (Width(w), Height(h)) = (width, height);
        let addressable = |n: usize| n >= 1 && n <= u32::MAX as usize;
        let cells_count = w.checked_mul(h);

        match cells_count {
            Some(count) if addressable(w) && addressable(h) => {
                trace!(width = w, height = h, "building fully walled grid");
                Ok(Grid {
                    width,
                    height,
                    cells: vec![Cell::walled(); count],
                })
            }
            _ => Err(ErrorKind::InvalidGridDimensions(width, height).into()),
        }
    }

    #[inline]
    pub fn width(&self) -> Width {
        self.width
    }

    #[inline]
    pub fn height(&self) -> Height {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (Width, Height) {
        (self.width, self.height)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.width.0 && (coord.y as usize) < self.height.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.width.0 + coord.x as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, coord: Cartesian2DCoordinate) -> Option<&Cell> {
        self.grid_coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    /// Is the wall on the `direction` side of the cell intact? False for invalid coordinates.
    pub fn has_wall(&self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> bool {
        self.cell(coord).map_or(false, |cell| cell.has_wall(direction))
    }

    pub fn is_fully_walled(&self, coord: Cartesian2DCoordinate) -> bool {
        self.cell(coord).map_or(false, Cell::is_fully_walled)
    }

    pub fn random_cell<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Cartesian2DCoordinate {
        let index = rng.index(self.size());
        let x = index % self.width.0;
        let y = index / self.width.0;
        Cartesian2DCoordinate::new(x as u32, y as u32)
    }

    /// Cells to the West, East, North and South (in that order) of a cell, but not
    /// necessarily joined to it by a passage.
    pub fn neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|&dir| self.neighbour_at_direction(coord, dir))
            .collect()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: Cartesian2DCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<Cartesian2DCoordinate> {
        direction
            .offset(coord)
            .filter(|&neighbour_coord| self.is_valid_coordinate(neighbour_coord))
    }

    /// Open a passage between two adjacent cells by clearing the wall each has facing the other.
    ///
    /// Returns the direction of `b` as seen from `a`. Carving an already open passage is allowed
    /// and leaves the grid unchanged.
    pub fn carve_passage(&mut self,
                         a: Cartesian2DCoordinate,
                         b: Cartesian2DCoordinate)
                         -> ::std::result::Result<CompassPrimary, CellLinkError> {
        if a == b {
            return Err(CellLinkError::SelfLink);
        }
        let a_index_opt = self.grid_coordinate_to_index(a);
        let b_index_opt = self.grid_coordinate_to_index(b);
        match (a_index_opt, b_index_opt) {
            (Some(a_index), Some(b_index)) => {
                let direction = a.direction_to(b).ok_or(CellLinkError::NotAdjacent)?;
                self.cells[a_index].remove_wall(direction);
                self.cells[b_index].remove_wall(direction.opposite());
                Ok(direction)
            }
            _ => Err(CellLinkError::InvalidGridCoordinate),
        }
    }

    /// Is there an open passage between two cells? Both facing walls must be cleared.
    pub fn is_passage_open(&self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> bool {
        match (a.direction_to(b), self.cell(a), self.cell(b)) {
            (Some(direction), Some(a_cell), Some(b_cell)) => {
                !a_cell.has_wall(direction) && !b_cell.has_wall(direction.opposite())
            }
            _ => false,
        }
    }

    pub fn is_neighbour_open(&self, coord: Cartesian2DCoordinate, direction: CompassPrimary) -> bool {
        self.neighbour_at_direction(coord, direction)
            .map_or(false, |neighbour_coord| self.is_passage_open(coord, neighbour_coord))
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.width, self.height)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(self.width, self.height)
    }

    /// Every open passage exactly once, as (cell, cell to its east or north).
    pub fn iter_passages(&self)
                         -> impl Iterator<Item = (Cartesian2DCoordinate, Cartesian2DCoordinate)> + '_ {
        static FORWARD: [CompassPrimary; 2] = [CompassPrimary::East, CompassPrimary::North];

        self.iter().flat_map(move |coord| {
            FORWARD.iter().filter_map(move |&dir| {
                self.neighbour_at_direction(coord, dir)
                    .filter(|&neighbour| self.is_passage_open(coord, neighbour))
                    .map(|neighbour| (coord, neighbour))
            })
        })
    }

    pub fn passages_count(&self) -> usize {
        self.iter_passages().count()
    }
}
