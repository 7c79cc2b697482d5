use std::fmt;

use crate::carver::MazeCarver;
use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::grid::Grid;
use crate::random::RandomSource;
use crate::utils::{fnv_hashset, FnvHashSet};

const WALL_LR_3: &str = "---";
const WALL_UD: &str = "|";
const CORNER: &str = "+";
const OPEN_LR_3: &str = "   ";
const OPEN_UD: &str = " ";

pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: Cartesian2DCoordinate) -> String {
        String::from("   ")
    }
}

/// Empty cell bodies, just the walls.
#[derive(Debug, Copy, Clone)]
pub struct WallsOnlyDisplay;
impl GridDisplay for WallsOnlyDisplay {}

/// Snapshot of a carver's progress: `@` marks the current cell, `.` the cells on the visit
/// stack that a dead end would backtrack through.
#[derive(Debug)]
pub struct TraversalDisplay {
    current: Option<Cartesian2DCoordinate>,
    on_stack_coordinates: FnvHashSet<Cartesian2DCoordinate>,
}

impl TraversalDisplay {
    pub fn new<R: RandomSource>(carver: &MazeCarver<R>) -> TraversalDisplay {
        let stack = carver.visit_stack();
        let mut on_stack_coordinates = fnv_hashset(stack.len());
        on_stack_coordinates.extend(stack.iter().cloned());
        TraversalDisplay {
            current: if carver.is_done() { None } else { carver.current() },
            on_stack_coordinates,
        }
    }
}

impl GridDisplay for TraversalDisplay {
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> String {
        if self.current == Some(coord) {
            String::from(" @ ")
        } else if self.on_stack_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}

/// A grid paired with a display, ready for `format!`.
pub struct GridRender<'a> {
    grid: &'a Grid,
    display: &'a dyn GridDisplay,
}

impl Grid {
    pub fn render<'a>(&'a self, display: &'a dyn GridDisplay) -> GridRender<'a> {
        GridRender { grid: self, display }
    }
}

impl<'a> fmt::Display for GridRender<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_grid(f, self.grid, self.display)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_grid(f, self, &WallsOnlyDisplay)
    }
}

// North is up, so rows are drawn from the highest y down. Each row draws its own north
// boundary ('+---+') and its cells' west/east boundaries ('|'); the south boundary of the
// bottom row closes the grid. Every cell reports its own walls, so a one sided wall still shows.
fn write_grid(f: &mut fmt::Formatter, grid: &Grid, display: &dyn GridDisplay) -> fmt::Result {
    let boundary = |row: &[Cartesian2DCoordinate], direction| -> String {
        let mut line = String::from(CORNER);
        for &coord in row {
            line.push_str(if grid.has_wall(coord, direction) { WALL_LR_3 } else { OPEN_LR_3 });
            line.push_str(CORNER);
        }
        line
    };

    let rows = grid.iter_row().rev().collect::<Vec<_>>();
    for row in &rows {
        writeln!(f, "{}", boundary(row.as_slice(), CompassPrimary::North))?;

        let mut middle = String::new();
        if let Some(&first) = row.first() {
            middle.push_str(if grid.has_wall(first, CompassPrimary::West) { WALL_UD } else { OPEN_UD });
        }
        for &coord in row {
            middle.push_str(&display.render_cell_body(coord));
            middle.push_str(if grid.has_wall(coord, CompassPrimary::East) { WALL_UD } else { OPEN_UD });
        }
        writeln!(f, "{}", middle)?;
    }

    if let Some(southmost) = rows.last() {
        writeln!(f, "{}", boundary(southmost.as_slice(), CompassPrimary::South))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::random::ScriptedSource;
    use crate::units::{Height, Width};

    fn grid(w: usize, h: usize) -> Grid {
        Grid::new(Width(w), Height(h)).expect("valid grid dimensions")
    }

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    #[test]
    fn walled_cell() {
        assert_eq!(format!("{}", grid(1, 1)), "+---+\n|   |\n+---+\n");
    }

    #[test]
    fn carved_pair() {
        let mut g = grid(2, 1);
        g.carve_passage(gc(0, 0), gc(1, 0)).unwrap();
        assert_eq!(format!("{}", g), "+---+---+\n|       |\n+---+---+\n");
    }

    #[test]
    fn north_is_drawn_up() {
        let mut g = grid(2, 2);
        g.carve_passage(gc(0, 0), gc(0, 1)).unwrap();
        g.carve_passage(gc(0, 1), gc(1, 1)).unwrap();
        g.carve_passage(gc(1, 1), gc(1, 0)).unwrap();
        let expected = "+---+---+\n\
                        |       |\n\
                        +   +   +\n\
                        |   |   |\n\
                        +---+---+\n";
        assert_eq!(format!("{}", g), expected);
    }

    #[test]
    fn traversal_overlay() {
        // start (1, 0), carve west to (0, 0): (1, 0) waits on the stack
        let mut g = grid(3, 1);
        let mut carver = MazeCarver::new(ScriptedSource::new(&[1, 0, 0]));
        carver.step(&mut g).unwrap();

        let display = TraversalDisplay::new(&carver);
        assert_eq!(format!("{}", g.render(&display)),
                   "+---+---+---+\n| @   . |   |\n+---+---+---+\n");

        while !carver.is_done() {
            carver.step(&mut g).unwrap();
        }
        let display = TraversalDisplay::new(&carver);
        assert_eq!(format!("{}", g.render(&display)),
                   "+---+---+---+\n|           |\n+---+---+---+\n");
    }
}
