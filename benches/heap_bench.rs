//! Throughput benchmarks for insert and remove_top
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_bench
//!
//! # Only the removal benchmarks
//! cargo bench --bench heap_bench -- 'remove_top/'
//! ```

use binary_max_heap::{Heap, MaxHeap};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const SIZES: [usize; 4] = [1 << 8, 1 << 12, 1 << 16, 1 << 20];

/// Distinct values in shuffled order, reproducible from the seed
fn shuffled_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut values: Vec<u64> = (0..n as u64).collect();
    values.shuffle(&mut rng);
    values
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.sample_size(20);

    for &n in &SIZES {
        let values = shuffled_values(n, 12345);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut heap = Heap::with_capacity(values.len());
                for &value in values {
                    heap.insert(value);
                }
                black_box(heap)
            });
        });
    }

    group.finish();
}

fn benchmark_remove_top(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_top");
    group.sample_size(20);

    for &n in &SIZES {
        let heap = Heap::from_elements(shuffled_values(n, 54321));
        group.bench_with_input(BenchmarkId::from_parameter(n), &heap, |b, heap| {
            b.iter_batched(
                || heap.clone(),
                |mut heap| {
                    while let Ok(value) = heap.remove_top() {
                        black_box(value);
                    }
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn benchmark_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(20);

    for &n in &SIZES[..3] {
        let values = shuffled_values(n, 999);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                // Two inserts per removal keeps the heap growing
                let mut heap = Heap::new();
                for pair in values.chunks(2) {
                    heap.extend(pair.iter().copied());
                    black_box(heap.remove_top().ok());
                }
                black_box(heap.len())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_remove_top,
    benchmark_mixed
);
criterion_main!(benches);
