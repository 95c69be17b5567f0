use common::shapes::Vector2;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grid::{GridConfig, SpatialGrid};
use rand::prelude::*;

fn random_positions(rng: &mut StdRng, count: usize) -> Vec<(usize, Vector2)> {
    (0..count)
        .map(|i| {
            (
                i,
                Vector2::new(rng.gen_range(0.0..1024.0), rng.gen_range(0.0..640.0)),
            )
        })
        .collect()
}

fn rebuild_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let actors = random_positions(&mut rng, 1000);
    let mut grid = SpatialGrid::new(GridConfig::default()).unwrap();

    c.bench_function("grid_rebuild_1000", |b| {
        b.iter(|| {
            grid.rebuild(black_box(actors.iter().copied()));
            grid.len()
        })
    });
}

fn nearby_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let mut grid = SpatialGrid::new(GridConfig::default()).unwrap();
    grid.rebuild(random_positions(&mut rng, 1000));
    let mut nearby = Vec::new();

    c.bench_function("grid_nearby", |b| {
        b.iter(|| {
            let pos = Vector2::new(rng.gen_range(0.0..1024.0), rng.gen_range(0.0..640.0));
            grid.nearby_into(black_box(pos), &mut nearby);
            nearby.len()
        })
    });
}

criterion_group!(benches, rebuild_benchmark, nearby_benchmark);
criterion_main!(benches);
