//! Partition benchmarks.
//!
//! Compares `split_by_size` and `split_average` on the same sources. Both
//! clone every element once, so the difference is the boundary arithmetic.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use groundwork::partition::{split_average, split_by_size};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 10000, 100000];

fn generate_source(size: usize) -> Vec<String> {
    (0..size).map(|index| format!("item-{index}")).collect()
}

fn benchmark_split_by_size(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partition_split_by_size");

    for size in SIZES {
        let source = generate_source(size);
        group.bench_with_input(BenchmarkId::new("chunk_64", size), &size, |bencher, _| {
            bencher.iter(|| black_box(split_by_size(black_box(&source), 64)));
        });
    }

    group.finish();
}

fn benchmark_split_average(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partition_split_average");

    for size in SIZES {
        let source = generate_source(size);
        group.bench_with_input(BenchmarkId::new("groups_7", size), &size, |bencher, _| {
            bencher.iter(|| black_box(split_average(black_box(&source), 7)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_split_by_size, benchmark_split_average);

criterion_main!(benches);
