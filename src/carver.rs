//! Randomised iterative depth-first maze carving, one bounded step per call.
//!
//! The carver walks the grid from a random start cell. At every step it either carves into a
//! random unvisited neighbour of the current cell, pushing the current cell onto its visit
//! stack, or, at a dead end, pops the stack to backtrack. It stops once every cell has been
//! visited, at which point the open passages form a spanning tree of the grid: a perfect maze.
//!
//! Between calls the grid is always consistent and can be inspected or rendered. Stopping early
//! is just not calling `step` again.

use bit_set::BitSet;
use tracing::{debug, trace};

use crate::cells::{Cartesian2DCoordinate, CoordinateSmallVec};
use crate::errors::*;
use crate::grid::Grid;
use crate::random::RandomSource;
use crate::units::{Height, Width};

/// What a single `step` did.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Step {
    /// Carved a passage from the first cell into the second, previously unvisited, cell.
    Advanced(Cartesian2DCoordinate, Cartesian2DCoordinate),
    /// Dead end at the first cell, moved back to the second. No walls change.
    Backtracked(Cartesian2DCoordinate, Cartesian2DCoordinate),
    /// Every cell is visited. Repeated calls keep reporting this.
    Done,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CarverPhase {
    Uninitialized,
    Carving,
    Done,
}

#[derive(Debug)]
pub struct MazeCarver<R: RandomSource> {
    rng: R,
    phase: CarverPhase,
    dimensions: Option<(Width, Height)>,
    start: Cartesian2DCoordinate,
    current: Cartesian2DCoordinate,
    visit_stack: Vec<Cartesian2DCoordinate>,
    visited: BitSet,
    visited_count: usize,
    advances: usize,
    backtracks: usize,
}

impl<R: RandomSource> MazeCarver<R> {
    pub fn new(rng: R) -> MazeCarver<R> {
        MazeCarver {
            rng,
            phase: CarverPhase::Uninitialized,
            dimensions: None,
            start: Cartesian2DCoordinate::new(0, 0),
            current: Cartesian2DCoordinate::new(0, 0),
            visit_stack: Vec::new(),
            visited: BitSet::new(),
            visited_count: 0,
            advances: 0,
            backtracks: 0,
        }
    }

    /// Advance the traversal by one unit of work.
    ///
    /// The first call picks the random start cell and then carries on with the first move, so
    /// a 1x1 grid reports `Done` straight away. The carver binds to the dimensions of the grid
    /// it first sees; stepping it with a differently shaped grid is a `GridMismatch` error.
    pub fn step(&mut self, grid: &mut Grid) -> Result<Step> {
        match self.phase {
            CarverPhase::Done => return Ok(Step::Done),
            CarverPhase::Uninitialized => self.begin(grid),
            CarverPhase::Carving => self.check_dimensions(grid)?,
        }

        let total = grid.size();
        if self.visited_count >= total {
            self.finish();
            return Ok(Step::Done);
        }

        let current = self.current;
        let candidates = self.valid_neighbours(grid, current);

        if candidates.is_empty() {
            let previous = self.visit_stack.pop().ok_or(ErrorKind::EmptyVisitStack)?;
            self.current = previous;
            self.backtracks += 1;
            trace!(from = ?current, to = ?previous, "backtracked");
            return Ok(Step::Backtracked(current, previous));
        }

        let next = candidates[self.rng.index(candidates.len())];
        grid.carve_passage(current, next).map_err(ErrorKind::PassageCarve)?;
        self.visit_stack.push(current);
        self.mark_visited(grid, next);
        self.current = next;
        self.advances += 1;
        trace!(from = ?current, to = ?next, visited = self.visited_count, "advanced");

        if self.visited_count == total {
            self.finish();
        }
        Ok(Step::Advanced(current, next))
    }

    #[inline]
    pub fn phase(&self) -> CarverPhase {
        self.phase
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == CarverPhase::Done
    }

    /// The randomly chosen first cell, once the first step has run.
    #[inline]
    pub fn start(&self) -> Option<Cartesian2DCoordinate> {
        if self.is_started() { Some(self.start) } else { None }
    }

    #[inline]
    pub fn current(&self) -> Option<Cartesian2DCoordinate> {
        if self.is_started() { Some(self.current) } else { None }
    }

    /// Cells waiting to be backtracked to, oldest first.
    #[inline]
    pub fn visit_stack(&self) -> &[Cartesian2DCoordinate] {
        &self.visit_stack
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    pub fn is_visited(&self, coord: Cartesian2DCoordinate) -> bool {
        self.index_of(coord).map_or(false, |index| self.visited.contains(index))
    }

    #[inline]
    pub fn advances(&self) -> usize {
        self.advances
    }

    #[inline]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Only meaningful once the first step has run.
    pub(crate) fn start_cell(&self) -> Cartesian2DCoordinate {
        self.start
    }

    fn is_started(&self) -> bool {
        self.phase != CarverPhase::Uninitialized
    }

    fn begin(&mut self, grid: &Grid) {
        let start = grid.random_cell(&mut self.rng);
        self.dimensions = Some(grid.dimensions());
        self.visited = BitSet::with_capacity(grid.size());
        self.mark_visited(grid, start);
        self.start = start;
        self.current = start;
        self.phase = CarverPhase::Carving;
        debug!(start = ?start, cells = grid.size(), "carving started");
    }

    fn finish(&mut self) {
        self.phase = CarverPhase::Done;
        self.visit_stack.clear();
        debug!(advances = self.advances, backtracks = self.backtracks, "carving complete");
    }

    fn check_dimensions(&self, grid: &Grid) -> Result<()> {
        match self.dimensions {
            Some(expected) if expected != grid.dimensions() => {
                Err(ErrorKind::GridMismatch(expected, grid.dimensions()).into())
            }
            _ => Ok(()),
        }
    }

    fn mark_visited(&mut self, grid: &Grid, coord: Cartesian2DCoordinate) {
        if let Some(index) = grid.grid_coordinate_to_index(coord) {
            if self.visited.insert(index) {
                self.visited_count += 1;
            }
        }
    }

    /// In bounds neighbours not yet visited, in the grid's neighbour order.
    fn valid_neighbours(&self, grid: &Grid, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        grid.neighbours(coord)
            .into_iter()
            .filter(|&neighbour| !self.is_visited(neighbour))
            .collect()
    }

    fn index_of(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        self.dimensions.and_then(|(Width(w), Height(h))| {
            if (coord.x as usize) < w && (coord.y as usize) < h {
                Some(coord.y as usize * w + coord.x as usize)
            } else {
                None
            }
        })
    }
}
