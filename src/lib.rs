//! **dfs_mazes** generates perfect mazes on rectangular grids with a step-driven, randomised
//! depth-first backtracker.
//!
//! Build a fully walled `grid::Grid`, then either run `generators::recursive_backtracker` to
//! completion or drive a `carver::MazeCarver` one `step` at a time and render or inspect the
//! grid between steps.

pub mod carver;
pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod grid_iterators;
pub mod passages;
pub mod random;
pub mod units;
mod utils;
