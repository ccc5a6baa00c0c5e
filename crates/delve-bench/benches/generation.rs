//! Criterion benchmarks for dungeon generation and world setup.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use delve_bench::{reference_profile, stress_profile};
use delve_core::LayerRegistry;
use delve_engine::World;
use delve_grid::LayerGrid;
use delve_test_utils::seeded_rng;

fn bench_generate_reference(c: &mut Criterion) {
    let generator = reference_profile(0).generator().unwrap();
    let mut rng = seeded_rng(0);
    c.bench_function("generate_reference_100x10", |b| {
        b.iter(|| black_box(generator.generate(&mut rng)));
    });
}

fn bench_generate_stress(c: &mut Criterion) {
    let generator = stress_profile(0).generator().unwrap();
    let mut rng = seeded_rng(0);
    c.bench_function("generate_stress_400x200", |b| {
        b.iter(|| black_box(generator.generate(&mut rng)));
    });
}

fn bench_world_setup(c: &mut Criterion) {
    let config = reference_profile(9);
    c.bench_function("world_generate_reference", |b| {
        b.iter(|| black_box(World::generate(&config).unwrap()));
    });
}

fn bench_spawn_search(c: &mut Criterion) {
    let config = stress_profile(3);
    let generator = config.generator().unwrap();
    let mut rng = seeded_rng(3);
    let grid = LayerGrid::generate(LayerRegistry::standard(), &generator, &mut rng).unwrap();
    c.bench_function("random_passable_tile_stress", |b| {
        b.iter(|| black_box(grid.random_passable_tile(&mut rng)));
    });
}

criterion_group!(
    benches,
    bench_generate_reference,
    bench_generate_stress,
    bench_world_setup,
    bench_spawn_search
);
criterion_main!(benches);
