use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::Cartesian2DCoordinate;
use crate::grid::Grid;
use crate::units::{EdgesCount, NodesCount};

/// The open passages of a grid as an undirected graph.
///
/// Node weights are the cell coordinates and node indices match the grid's row-major cell
/// indices, so `NodeIndex::new(grid.grid_coordinate_to_index(c)?)` finds a cell's node.
pub fn passage_graph(grid: &Grid) -> UnGraph<Cartesian2DCoordinate, ()> {
    let mut graph = UnGraph::with_capacity(grid.size(), grid.size().saturating_sub(1));
    for coord in grid.iter() {
        let _ = graph.add_node(coord);
    }

    for (a, b) in grid.iter_passages() {
        let index_pair = (grid.grid_coordinate_to_index(a), grid.grid_coordinate_to_index(b));
        if let (Some(a_index), Some(b_index)) = index_pair {
            let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
        }
    }
    graph
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct PassageAnalysis {
    pub cells: NodesCount,
    pub passages: EdgesCount,
    pub connected_components: usize,
    pub has_cycle: bool,
}

impl PassageAnalysis {
    /// A perfect maze: every cell reachable from every other by exactly one route.
    pub fn is_perfect(&self) -> bool {
        self.connected_components == 1 && !self.has_cycle && self.passages.0 + 1 == self.cells.0
    }
}

pub fn analyse(grid: &Grid) -> PassageAnalysis {
    let graph = passage_graph(grid);
    PassageAnalysis {
        cells: NodesCount(graph.node_count()),
        passages: EdgesCount(graph.edge_count()),
        connected_components: connected_components(&graph),
        has_cycle: is_cyclic_undirected(&graph),
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::generators;
    use crate::random::seeded_rng;
    use crate::units::{Height, Width};

    fn grid(w: usize, h: usize) -> Grid {
        Grid::new(Width(w), Height(h)).expect("valid grid dimensions")
    }

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    #[test]
    fn walled_grid_is_all_islands() {
        let analysis = analyse(&grid(3, 4));
        assert_eq!(analysis.cells, NodesCount(12));
        assert_eq!(analysis.passages, EdgesCount(0));
        assert_eq!(analysis.connected_components, 12);
        assert!(!analysis.has_cycle);
        assert!(!analysis.is_perfect());
    }

    #[test]
    fn single_cell_is_perfect() {
        assert!(analyse(&grid(1, 1)).is_perfect());
    }

    #[test]
    fn loop_is_not_perfect() {
        let mut g = grid(2, 2);
        g.carve_passage(gc(0, 0), gc(1, 0)).expect("carve failed");
        g.carve_passage(gc(1, 0), gc(1, 1)).expect("carve failed");
        g.carve_passage(gc(1, 1), gc(0, 1)).expect("carve failed");
        assert!(analyse(&g).is_perfect());

        g.carve_passage(gc(0, 1), gc(0, 0)).expect("carve failed");
        let analysis = analyse(&g);
        assert!(analysis.has_cycle);
        assert_eq!(analysis.connected_components, 1);
        assert!(!analysis.is_perfect());
    }

    #[test]
    fn graph_nodes_follow_grid_indices() {
        let mut g = grid(3, 2);
        g.carve_passage(gc(2, 0), gc(2, 1)).expect("carve failed");
        let graph = passage_graph(&g);
        for coord in g.iter() {
            let index = g.grid_coordinate_to_index(coord).unwrap();
            assert_eq!(graph[NodeIndex::new(index)], coord);
        }
        assert!(graph.find_edge(NodeIndex::new(2), NodeIndex::new(5)).is_some());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn carved_grids_are_spanning_trees() {
        for &(w, h) in &[(1, 1), (2, 1), (1, 7), (5, 5), (16, 3), (30, 20)] {
            let mut g = grid(w, h);
            generators::recursive_backtracker(&mut g, seeded_rng((w * 31 + h) as u64))
                .expect("carving failed");
            let analysis = analyse(&g);
            assert!(analysis.is_perfect(), "{} x {} not perfect: {:?}", w, h, analysis);
            assert_eq!(analysis.passages, EdgesCount(w * h - 1));
        }
    }
}
