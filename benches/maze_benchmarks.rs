use criterion::{black_box, criterion_group, criterion_main, Criterion};

use maze_backtracker::{generate, grid::Grid, solve, Generator, Maze, NoopObserver};

// Fixed seed for deterministic benchmarks
const BENCHMARK_SEED: u64 = 12345;

fn create_test_maze(size: usize) -> Maze {
    generate(size, size, Some(BENCHMARK_SEED), &mut NoopObserver).unwrap()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in [16, 64, 256].iter() {
        group.bench_with_input(format!("size_{}", size), size, |b, &size| {
            b.iter(|| black_box(create_test_maze(size)));
        });
    }

    group.finish();
}

fn bench_generator_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator_tick");

    for size in [25, 50, 100].iter() {
        group.bench_with_input(format!("single_tick_{}", size), size, |b, &size| {
            b.iter_batched(
                || Generator::new(Maze::new(size, size).unwrap(), Some(BENCHMARK_SEED)),
                |mut generator| black_box(generator.tick(&mut NoopObserver)),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for size in [16, 64, 256].iter() {
        group.bench_with_input(format!("size_{}", size), size, |b, &size| {
            b.iter_batched(
                || create_test_maze(size),
                |mut maze| black_box(solve(&mut maze, &mut NoopObserver)),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_grid_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_operations");

    for size in [25, 50, 100].iter() {
        group.bench_with_input(format!("grid_creation_{}", size), size, |b, &size| {
            b.iter(|| black_box(Grid::new(size, size, &mut |x, y| x + y)));
        });

        group.bench_with_input(format!("grid_neighbors_{}", size), size, |b, &size| {
            let grid = Grid::new(size, size, &mut |x, y| x + y);
            b.iter(|| {
                for x in 0..size {
                    for y in 0..size {
                        black_box(grid.get_neighbor_positions(x, y));
                    }
                }
            });
        });
    }

    group.finish();
}

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .measurement_time(std::time::Duration::from_secs(10))
        .warm_up_time(std::time::Duration::from_secs(3))
}

criterion_group!(
    name = benches;
    config = configure_criterion();
    targets =
        bench_generate,
        bench_generator_tick,
        bench_solve,
        bench_grid_operations
);

criterion_main!(benches);
