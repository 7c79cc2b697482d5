use docopt::Docopt;
use serde_derive::Deserialize;
use dfs_mazes::{
    carver::{MazeCarver, Step},
    generators,
    grid::Grid,
    grid_displays::TraversalDisplay,
    passages,
    random::seeded_rng,
    units,
};
use itertools::Itertools;
use rand::Rng;
use std::{
    fs::File,
    io,
    io::prelude::*,
    iter,
    thread,
    time::Duration,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "DFS Mazes

Usage:
    dfs_mazes_driver -h | --help
    dfs_mazes_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--animate] [--tick-delay=<ms>] [--text-out=<path>] [--save-edges=<path>]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n.
    --grid-width=<w>       The grid width in a w*h grid [default: 10].
    --grid-height=<h>      The grid height in a w*h grid [default: 10].
    --seed=<s>             Seed for the random cell and neighbour choices. A random seed is drawn and logged if not given.
    --animate              Print the maze after every carving step, marking the current cell '@' and the backtrack stack '.'.
    --tick-delay=<ms>      Milliseconds to wait between carving steps [default: 0].
    --text-out=<path>      Output file path for a textual rendering of the finished maze.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_animate: bool,
    flag_tick_delay: u64,
    flag_text_out: String,
    flag_save_edges: String,
}

// Errors from the library are linked in; docopt and io failures are wrapped as foreign links.
mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::dfs_mazes::errors::Error, ::dfs_mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    if let Err(e) = run() {
        match *e.kind() {
            ErrorKind::DocOptFailure(ref docopt_error) => docopt_error.exit(),
            _ => {
                eprintln!("error: {}", e);
                for cause in e.iter().skip(1) {
                    eprintln!("caused by: {}", cause);
                }
                ::std::process::exit(1);
            }
        }
    }
}

fn run() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;
    debug!(?args, "parsed arguments");

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };
    let mut maze_grid = Grid::new(units::Width(width), units::Height(height))?;

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, width, height, "carving maze");

    if args.flag_animate || args.flag_tick_delay > 0 {
        carve_step_by_step(&mut maze_grid, seed, &args)?;
    } else {
        let summary = generators::recursive_backtracker(&mut maze_grid, seeded_rng(seed))?;
        info!(start = ?summary.start, advances = summary.advances,
              backtracks = summary.backtracks, "maze carved");
    }

    let analysis = passages::analyse(&maze_grid);
    if !analysis.is_perfect() {
        warn!(?analysis, "carved maze is not a perfect maze");
    }

    if args.flag_text_out.is_empty() {
        println!("{}", maze_grid);
    } else {
        write_text_to_file(&format!("{}", maze_grid), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze_grid, &args.flag_save_edges)?;
    }

    Ok(())
}

/// External driver for the carver: one step per tick, optionally printing the progress.
fn carve_step_by_step(maze_grid: &mut Grid, seed: u64, maze_args: &MazeArgs) -> Result<()> {
    let tick = Duration::from_millis(maze_args.flag_tick_delay);
    let mut carver = MazeCarver::new(seeded_rng(seed));

    loop {
        let step = carver.step(maze_grid)?;
        if step == Step::Done {
            break;
        }

        if maze_args.flag_animate {
            let display = TraversalDisplay::new(&carver);
            println!("{:?}\n{}", step, maze_grid.render(&display));
        }
        if tick > Duration::from_millis(0) {
            thread::sleep(tick);
        }
    }

    info!(start = ?carver.start(), advances = carver.advances(),
          backtracks = carver.backtracks(), "maze carved");
    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze_grid: &Grid, file_path: &str) -> Result<()> {

    let header = format!("{} {}", maze_grid.size(), maze_grid.passages_count());
    let edges = maze_grid
        .iter_passages()
        .filter_map(|(src, dst)| {
            match (maze_grid.grid_coordinate_to_index(src), maze_grid.grid_coordinate_to_index(dst)) {
                (Some(index_a), Some(index_b)) => Some(format!("{} {}", index_a + 1, index_b + 1)),
                _ => None,
            }
        });
    let mut graph_data = iter::once(header).chain(edges).join("\n");
    graph_data.push('\n');

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
