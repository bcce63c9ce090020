//! Benchmark for Deque vs standard VecDeque.
//!
//! Compares push/pop at both ends, random access and range removal.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::collections::VecDeque;
use strata::collections::Deque;

// =============================================================================
// push / pop Benchmark
// =============================================================================

fn benchmark_push_pop(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("push_pop");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("Deque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut deque = Deque::new();
                for index in 0..size {
                    deque.push_back(black_box(index));
                }
                // Draining from the front forces rebalancing
                let mut sum = 0;
                while let Some(value) = deque.pop_front() {
                    sum += value;
                }
                black_box(sum)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut deque = VecDeque::new();
                    for index in 0..size {
                        deque.push_back(black_box(index));
                    }
                    let mut sum = 0;
                    while let Some(value) = deque.pop_front() {
                        sum += value;
                    }
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let mut deque: Deque<usize> = (0..size / 2).collect();
        deque.extend_front((size / 2..size).rev());
        let standard: VecDeque<usize> = deque.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("Deque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                for index in 0..size {
                    sum += deque[black_box(index)];
                }
                black_box(sum)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sum = 0;
                    for index in 0..size {
                        sum += standard[black_box(index)];
                    }
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// remove_range Benchmark
// =============================================================================

fn benchmark_remove_range(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove_range");

    for size in [100, 1000, 10000] {
        let deque: Deque<usize> = (0..size).collect();
        let standard: VecDeque<usize> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Deque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut deque = deque.clone();
                deque.remove_range(black_box(size / 4..size / 2));
                black_box(deque)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("VecDeque", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut standard = standard.clone();
                    standard.drain(black_box(size / 4..size / 2));
                    black_box(standard)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_push_pop,
    benchmark_get,
    benchmark_remove_range
);
criterion_main!(benches);
