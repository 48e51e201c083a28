//! Version Resolution Benchmarks
//!
//! Measures the request-time lookup against the number of registered
//! generations of a route, plus the one-time build cost.
//!
//! Run with: cargo bench --package versioning-bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rustapi_versioning::{Version, VersionInterval, VersionResolver};

/// `count` back-to-back generations, each three versions wide, the last one open
fn generations(count: usize) -> Vec<(usize, VersionInterval)> {
    (0..count)
        .map(|i| {
            let start = (i * 3) as Version;
            let end = if i + 1 == count { None } else { Some(start + 3) };
            (i, VersionInterval::new(start, end).unwrap())
        })
        .collect()
}

fn benchmark_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for count in [1, 4, 16, 64].iter() {
        let resolver = VersionResolver::build(generations(*count)).unwrap();
        let newest = (*count * 3) as Version;

        group.bench_with_input(BenchmarkId::new("latest", count), count, |b, _| {
            b.iter(|| resolver.resolve(black_box(newest)))
        });

        group.bench_with_input(BenchmarkId::new("oldest", count), count, |b, _| {
            b.iter(|| resolver.resolve(black_box(0)))
        });
    }

    group.finish();
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for count in [1, 4, 16, 64].iter() {
        let mut entries = generations(*count);
        entries.reverse();

        group.bench_with_input(BenchmarkId::new("reversed", count), count, |b, _| {
            b.iter(|| VersionResolver::build(black_box(entries.clone())))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_resolve, benchmark_build);
criterion_main!(benches);
