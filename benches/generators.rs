use criterion::{criterion_group, criterion_main, Criterion};
use dfs_mazes::{
    carver::{MazeCarver, Step},
    generators,
    grid::Grid,
    random::seeded_rng,
    units::{Height, Width},
};

fn bench_build_grid_128(c: &mut Criterion) {
    c.bench_function("build_grid_128", |b| {
        b.iter(|| Grid::new(Width(128), Height(128)).unwrap())
    });
}

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    c.bench_function("recursive_backtracker_maze_32", |b| {
        b.iter(|| {
            let mut g = Grid::new(Width(32), Height(32)).unwrap();
            generators::recursive_backtracker(&mut g, seeded_rng(32)).unwrap()
        })
    });
}

fn bench_stepped_carver_maze_32(c: &mut Criterion) {
    c.bench_function("stepped_carver_maze_32", |b| {
        b.iter(|| {
            let mut g = Grid::new(Width(32), Height(32)).unwrap();
            let mut carver = MazeCarver::new(seeded_rng(32));
            while carver.step(&mut g).unwrap() != Step::Done {}
            g
        })
    });
}

criterion_group!(
    benches,
    bench_build_grid_128,
    bench_recursive_backtracker_maze_32,
    bench_stepped_carver_maze_32
);
criterion_main!(benches);
