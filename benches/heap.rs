//! Build and drain timings for the binary heap.
//!
//! Compares the two construction strategies against a plain push loop, then
//! times full root-extraction drains under both ordering policies.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion,
};
use fundamentals::{MaxHeap, MinHeap};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

const SIZES: [usize; 3] = [64, 1024, 16384];

fn scattered_keys(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.gen_range(-1_000_000, 1_000_000))
        .collect()
}

fn benchmark_builds(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &len in &SIZES {
        let entries: Vec<(i32, i32)> = scattered_keys(len, 0xb17d)
            .into_iter()
            .map(|key| (key, key))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("iterative", len),
            &entries,
            |b, entries| {
                b.iter(|| {
                    let mut heap = MaxHeap::from_unordered(entries.iter().copied());
                    heap.build_iterative(len);
                    black_box(heap)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("recursive", len),
            &entries,
            |b, entries| {
                b.iter(|| {
                    let mut heap = MaxHeap::from_unordered(entries.iter().copied());
                    heap.build_recursive(len);
                    black_box(heap)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("push_loop", len),
            &entries,
            |b, entries| {
                b.iter(|| {
                    let mut heap = MaxHeap::new();
                    for &(key, value) in entries {
                        heap.push(key, value);
                    }
                    black_box(heap)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_drains(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain");

    for &len in &SIZES {
        let keys = scattered_keys(len, 0xd7a1);

        group.bench_with_input(BenchmarkId::new("max", len), &keys, |b, keys| {
            b.iter_batched(
                || MaxHeap::from(keys.clone()),
                |mut heap| {
                    while let Some(entry) = heap.pop() {
                        black_box(entry.key);
                    }
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("min", len), &keys, |b, keys| {
            b.iter_batched(
                || MinHeap::from(keys.clone()),
                |mut heap| {
                    while let Some(entry) = heap.pop() {
                        black_box(entry.key);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_builds, benchmark_drains);
criterion_main!(benches);
