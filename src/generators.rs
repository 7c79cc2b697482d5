use crate::carver::{MazeCarver, Step};
use crate::cells::Cartesian2DCoordinate;
use crate::errors::*;
use crate::grid::Grid;
use crate::random::RandomSource;

/// How a finished carving run went.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct CarveSummary {
    pub start: Cartesian2DCoordinate,
    pub advances: usize,
    pub backtracks: usize,
}

/// Apply the recursive backtracker (randomised depth-first search) to a fully walled grid,
/// stepping a `MazeCarver` until every cell is visited.
///
/// Produces a perfect maze with long winding corridors and relatively few dead ends. Use a
/// `MazeCarver` directly to animate the run one step at a time.
pub fn recursive_backtracker<R: RandomSource>(grid: &mut Grid, rng: R) -> Result<CarveSummary> {
    let mut carver = MazeCarver::new(rng);
    while carver.step(grid)? != Step::Done {}

    Ok(CarveSummary {
        start: carver.start_cell(),
        advances: carver.advances(),
        backtracks: carver.backtracks(),
    })
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::random::seeded_rng;
    use crate::units::{Height, Width};

    #[test]
    fn summary_counts_every_carve() {
        let mut g = Grid::new(Width(10), Height(4)).unwrap();
        let summary = recursive_backtracker(&mut g, seeded_rng(11)).unwrap();
        assert_eq!(summary.advances, 39);
        assert_eq!(g.passages_count(), 39);
        assert!(g.is_valid_coordinate(summary.start));
    }

    #[test]
    fn corridor_is_carved_end_to_end() {
        let mut g = Grid::new(Width(12), Height(1)).unwrap();
        let summary = recursive_backtracker(&mut g, rand::thread_rng()).unwrap();
        assert_eq!(summary.advances, 11);
        assert_eq!(g.passages_count(), 11);
        assert!(g.iter().all(|coord| !g.is_fully_walled(coord)));
    }
}
