use criterion::{criterion_group, criterion_main, Criterion};
use mazes::{
    generators,
    grid_dimensions::GridDimensions,
    layout::WallLayoutBuilder,
    random::RngSource,
    units::{ColumnsCount, Height, RowsCount, Width},
};

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let dimensions = GridDimensions::new(RowsCount(32), ColumnsCount(32)).unwrap();
    let mut rng = RngSource::seeded(32);

    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| generators::recursive_backtracker(&dimensions, &mut rng).unwrap())
    });
}

fn bench_recursive_backtracker_maze_512(c: &mut Criterion) {
    let dimensions = GridDimensions::new(RowsCount(512), ColumnsCount(512)).unwrap();
    let mut rng = RngSource::seeded(512);

    c.bench_function("recursive_backtracker_maze_512", move |b| {
        b.iter(|| generators::recursive_backtracker(&dimensions, &mut rng).unwrap())
    });
}

fn bench_wall_layout_12_by_30(c: &mut Criterion) {
    let dimensions = GridDimensions::new(RowsCount(12), ColumnsCount(30)).unwrap();
    let maze = generators::recursive_backtracker(&dimensions, &mut RngSource::seeded(1)).unwrap();
    let builder = WallLayoutBuilder::new(Width(1200.0), Height(480.0));

    c.bench_function("wall_layout_12_by_30", move |b| {
        b.iter(|| builder.build(&maze).unwrap())
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_512,
    bench_wall_layout_12_by_30
);
criterion_main!(benches);
