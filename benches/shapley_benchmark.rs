//! Benchmark for exact Shapley computation across registry sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fairalloc::{AllocationEngine, Consumer};

/// Build an engine with `n` consumers and a pool covering half the demand.
fn sample_engine(n: usize) -> AllocationEngine {
    let consumers: Vec<Consumer> = (0..n)
        .map(|i| Consumer::new(format!("{}", i + 1), 10.0 + i as f64 * 5.0))
        .collect();
    let total_demand: f64 = consumers.iter().map(|c| c.demand).sum();
    AllocationEngine::new(consumers, total_demand / 2.0).unwrap()
}

fn bench_shapley_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapley_values");

    // Cost doubles per consumer; keep sizes small.
    for n in [4, 8, 12, 16] {
        let engine = sample_engine(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &engine, |b, engine| {
            b.iter(|| black_box(engine.compute_shapley_values()));
        });
    }

    group.finish();
}

fn bench_allocation_policies(c: &mut Criterion) {
    let engine = sample_engine(10);

    c.bench_function("allocate_by_shapley_10", |b| {
        b.iter(|| black_box(engine.allocate_by_shapley()));
    });

    c.bench_function("allocate_proportionally_10", |b| {
        b.iter(|| black_box(engine.allocate_proportionally()));
    });
}

criterion_group!(benches, bench_shapley_values, bench_allocation_policies);
criterion_main!(benches);
