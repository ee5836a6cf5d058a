//! Traversal and join benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rollcall::{join_default, Pull, SequenceIterator};

fn benchmark_pull(c: &mut Criterion) {
    let source: Vec<u64> = (0..10_000).collect();

    c.bench_function("pull_drain_10000", |b| {
        b.iter(|| {
            let mut it = SequenceIterator::from_slice(source.as_slice());
            black_box(it.drain());
        });
    });
}

fn benchmark_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");
    for size in [10usize, 1_000, 100_000] {
        let names: Vec<String> = (0..size).map(|i| format!("employee-{i}")).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &names, |b, names| {
            b.iter(|| black_box(join_default(SequenceIterator::from_slice(names.as_slice()))));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_pull, benchmark_join);
criterion_main!(benches);
