//! IAI-Callgrind benchmark for set relations.
//!
//! Measures instruction counts on both sides of the linear-scan limit.

use groundwork::relation::{difference, exist_intersection, intersection};
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;

fn setup_overlapping(size: u32) -> (Vec<u32>, Vec<u32>) {
    ((0..size).collect(), (size / 2..size + size / 2).collect())
}

#[library_benchmark]
#[bench::small(setup_overlapping(16))]
#[bench::large(setup_overlapping(10000))]
fn difference_overlapping(inputs: (Vec<u32>, Vec<u32>)) -> Vec<u32> {
    let (left, right) = inputs;
    black_box(difference(black_box(&left), black_box(&right)))
}

#[library_benchmark]
#[bench::small(setup_overlapping(16))]
#[bench::large(setup_overlapping(10000))]
fn intersection_overlapping(inputs: (Vec<u32>, Vec<u32>)) -> Vec<u32> {
    let (left, right) = inputs;
    black_box(intersection(black_box(&left), black_box(&right)))
}

#[library_benchmark]
#[bench::small(setup_overlapping(16))]
#[bench::large(setup_overlapping(10000))]
fn exist_intersection_overlapping(inputs: (Vec<u32>, Vec<u32>)) -> bool {
    let (left, right) = inputs;
    black_box(exist_intersection(black_box(&left), black_box(&right)))
}

library_benchmark_group!(
    name = relation_group;
    benchmarks = difference_overlapping, intersection_overlapping, exist_intersection_overlapping
);

main!(library_benchmark_groups = relation_group);
