//! Benchmarks for full-grid generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rng_grid::engine::generate;
use rng_grid::prelude::*;

fn bench_generate(c: &mut Criterion) {
    let conf = GridConf::default();
    for &algo in list_algorithms() {
        c.bench_function(&format!("generate_120x120_{}", algo.key()), |b| {
            b.iter(|| generate(black_box(algo), black_box(Seed::from(42u64)), conf))
        });
    }
}

fn bench_step(c: &mut Criterion) {
    for &algo in list_algorithms() {
        c.bench_function(&format!("step_{}", algo.key()), |b| b.iter(|| algo.step(black_box(123_456_789))));
    }
}

criterion_group!(benches, bench_generate, bench_step);
criterion_main!(benches);
