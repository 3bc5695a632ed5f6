//! Performance benchmarks for the sequential chain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linkchain::{ChainConfig, SequentialChain};

fn quiet_chain(len: u64) -> SequentialChain<u64> {
    let mut chain = SequentialChain::with_config(ChainConfig {
        report_outcomes: false,
        ..Default::default()
    });
    chain.extend(0..len);
    chain
}

/// Benchmark append with varying chain lengths (no tail pointer)
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for len in [10u64, 100, 1000, 5000] {
        group.bench_with_input(BenchmarkId::new("existing_len", len), &len, |b, &len| {
            b.iter_batched(
                || quiet_chain(len),
                |mut chain| {
                    chain.append(black_box(len));
                    chain
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark rendering
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for len in [10u64, 100, 1000] {
        let chain = quiet_chain(len);
        group.bench_with_input(BenchmarkId::new("len", len), &chain, |b, chain| {
            b.iter(|| black_box(chain.render()));
        });
    }

    group.finish();
}

/// Benchmark deletion at head, middle, and tail of a 1000-link chain
fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_at");
    let len = 1000u64;

    for (name, position) in [("head", 1i64), ("middle", 500), ("tail", 1000)] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || quiet_chain(len),
                |mut chain| {
                    black_box(chain.delete_at(position).ok());
                    chain
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_append, bench_render, bench_delete);
criterion_main!(benches);
