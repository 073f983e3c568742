use array_utils::{chunk, find_max, most_frequent, remove_duplicates};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Deterministic input with plenty of repeats
fn create_input(len: usize) -> Vec<u64> {
    (0..len as u64).map(|i| (i * 7919) % (len as u64 / 4 + 1)).collect()
}

fn bench_remove_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_duplicates");
    for len in [100, 10_000, 100_000] {
        let input = create_input(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter(|| remove_duplicates(black_box(input)))
        });
    }
    group.finish();
}

fn bench_chunk(c: &mut Criterion) {
    let input = create_input(100_000);
    let mut group = c.benchmark_group("chunk");
    for size in [1, 16, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| chunk(black_box(&input), size))
        });
    }
    group.finish();
}

fn bench_scans(c: &mut Criterion) {
    let input = create_input(100_000);
    c.bench_function("find_max_100k", |b| b.iter(|| find_max(black_box(&input))));
    c.bench_function("most_frequent_100k", |b| {
        b.iter(|| most_frequent(black_box(&input)))
    });
}

criterion_group!(benches, bench_remove_duplicates, bench_chunk, bench_scans);
criterion_main!(benches);
