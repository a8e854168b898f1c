//! Benchmarks for single classification and bulk precomputation
//!
//! Run with: cargo bench -p splitwave-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use splitwave_core::{Dimension, Engine, RangeRequest, SieveTables, TableCache};
use std::sync::Arc;

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");
    for max_n in [1_680u64, 16_800, 168_000] {
        group.throughput(Throughput::Elements(max_n + 1));
        group.bench_with_input(BenchmarkId::from_parameter(max_n), &max_n, |b, &max_n| {
            b.iter(|| SieveTables::new(black_box(max_n)))
        });
    }
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let engine = Engine::new(1680).unwrap();
    let mut group = c.benchmark_group("classify");
    for n in [0i64, 7, -14, 210, 1331, 1679] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| engine.classify(black_box(n), Dimension::D3))
        });
    }
    group.finish();
}

fn bench_precompute(c: &mut Criterion) {
    let engine = Engine::new(16_800).unwrap();
    let mut group = c.benchmark_group("precompute_range");
    for max_n in [1_000i64, 1_680, 16_800] {
        for negatives in [false, true] {
            let count = if negatives { 2 * max_n + 1 } else { max_n + 1 };
            group.throughput(Throughput::Elements(count as u64));
            let id = format!("{max_n}/{}", if negatives { "signed" } else { "positive" });
            group.bench_function(BenchmarkId::from_parameter(id), |b| {
                b.iter(|| engine.precompute_range(0, black_box(max_n), Dimension::D0, negatives))
            });
        }
    }
    group.finish();
}

fn bench_cache_hit(c: &mut Criterion) {
    let cache = TableCache::new(Arc::new(Engine::new(1680).unwrap()));
    let request = RangeRequest::full(1680, Dimension::D1, true);
    cache.get_or_build(request).unwrap();
    c.bench_function("table_cache_hit", |b| b.iter(|| cache.get_or_build(black_box(request))));
}

criterion_group!(benches, bench_sieve, bench_classify, bench_precompute, bench_cache_hit);
criterion_main!(benches);
