//! Benchmark for Tree vs standard BTreeSet.
//!
//! Tree pays for persistence on every update, so these numbers show the
//! cost of keeping old versions alive.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::collections::BTreeSet;
use strata::collections::Tree;

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("Tree", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut tree = Tree::new();
                for index in 0..size {
                    tree = tree.insert(black_box(index));
                }
                black_box(tree)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("BTreeSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut set = BTreeSet::new();
                    for index in 0..size {
                        set.insert(black_box(index));
                    }
                    black_box(set)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// contains Benchmark
// =============================================================================

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("contains");

    for size in [100, 1000, 10000] {
        let tree: Tree<i32> = (0..size).collect();
        let set: BTreeSet<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Tree", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut found = 0;
                for key in 0..size {
                    if tree.contains(&black_box(key)) {
                        found += 1;
                    }
                }
                black_box(found)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("BTreeSet", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut found = 0;
                    for key in 0..size {
                        if set.contains(&black_box(key)) {
                            found += 1;
                        }
                    }
                    black_box(found)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// pop_first Benchmark
// =============================================================================

fn benchmark_pop_first(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pop_first");

    for size in [100, 1000, 10000] {
        let tree: Tree<i32> = (0..size).collect();
        let set: BTreeSet<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Tree", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut current = tree.clone();
                let mut sum = 0;
                while let Some((rest, smallest)) = current.pop_first() {
                    sum += smallest;
                    current = rest;
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut current = set.clone();
                let mut sum = 0;
                while let Some(smallest) = current.pop_first() {
                    sum += smallest;
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// iteration Benchmark
// =============================================================================

fn benchmark_iteration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iteration");

    for size in [100, 1000, 10000] {
        let tree: Tree<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Tree", size), &size, |bencher, _| {
            bencher.iter(|| black_box(tree.iter().sum::<i32>()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_contains,
    benchmark_pop_first,
    benchmark_iteration
);
criterion_main!(benches);
