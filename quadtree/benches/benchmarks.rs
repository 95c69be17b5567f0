use common::shapes::Rect;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::{Entity, QuadTree};
use rand::prelude::*;

fn random_walls(rng: &mut StdRng, count: u32) -> Vec<Entity> {
    (0..count)
        .map(|id| {
            Entity::new(
                id,
                Rect::from_xywh(
                    rng.gen_range(0.0..880.0),
                    rng.gen_range(0.0..520.0),
                    rng.gen_range(0.0..80.0),
                    rng.gen_range(0.0..80.0),
                ),
            )
        })
        .collect()
}

fn build_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let walls = random_walls(&mut rng, 1000);

    c.bench_function("quadtree_build_1000", |b| {
        b.iter(|| {
            let mut quadtree = QuadTree::new(Rect::from_xywh(0.0, 0.0, 960.0, 600.0)).unwrap();
            for wall in &walls {
                quadtree.insert(black_box(*wall));
            }
            quadtree
        })
    });
}

fn query_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let mut quadtree = QuadTree::new(Rect::from_xywh(0.0, 0.0, 960.0, 600.0)).unwrap();
    for wall in random_walls(&mut rng, 1000) {
        quadtree.insert(wall);
    }
    let mut found = Vec::new();

    c.bench_function("quadtree_query", |b| {
        b.iter(|| {
            let area = Rect::from_xywh(
                rng.gen_range(0.0..928.0),
                rng.gen_range(0.0..568.0),
                32.0,
                32.0,
            );
            found.clear();
            quadtree.query_into(black_box(&area), &mut found);
            found.len()
        })
    });
}

criterion_group!(benches, build_benchmark, query_benchmark);
criterion_main!(benches);
