//! Benchmark of the full compute path (fuzzify, infer, defuzzify)

use core::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use fuzzyfan_core::FuzzyEngine;

fn bench_compute(c: &mut Criterion) {
    let engine = FuzzyEngine::new();

    c.bench_function("compute_typical", |b| {
        b.iter(|| engine.compute(black_box(27.0), black_box(50.0)))
    });

    c.bench_function("compute_overlap", |b| {
        // Overlapping sets fire four rules and exercise every clip branch
        b.iter(|| engine.compute(black_box(32.0), black_box(70.0)))
    });
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
