//! Parallel map benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Sequential baseline (one worker)
//! - Host-sized worker pool
//! - Rayon `par_iter` as an external reference point
//! - The elimination sieve at a few bounds

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use listkit::parallel::ParallelMapper;
use listkit::sieve::primes_up_to;
use listkit::workload::fib_tree;
use rayon::prelude::*;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

/// Mixed-cost Fibonacci inputs so workers finish out of order.
fn fib_inputs(size: usize) -> Vec<u64> {
    (0..size).map(|i| 18 + (i % 8) as u64).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_parallel_fib(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_fib");

    for size in [64usize, 256, 1024] {
        let input = fib_inputs(size);
        group.throughput(Throughput::Elements(size as u64));

        let single = ParallelMapper::with_workers(1).unwrap();
        group.bench_with_input(BenchmarkId::new("one_worker", size), &input, |b, input| {
            b.iter(|| single.map(|&n| fib_tree(n), black_box(input)).unwrap())
        });

        let host = ParallelMapper::default();
        group.bench_with_input(BenchmarkId::new("host_workers", size), &input, |b, input| {
            b.iter(|| host.map(|&n| fib_tree(n), black_box(input)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("rayon", size), &input, |b, input| {
            b.iter(|| {
                black_box(input)
                    .par_iter()
                    .map(|&n| fib_tree(n))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");

    for n in [1_000i64, 10_000, 50_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| primes_up_to(black_box(n)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parallel_fib, bench_sieve);
criterion_main!(benches);
