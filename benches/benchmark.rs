//! Benchmarks for ring30 generator operations.
//!
//! Measures bulk byte reads, single-word extraction and bounded sampling,
//! and compares bulk reads and `next_u64` with the generators shipped by
//! `rand`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::{SmallRng, StdRng};
use rand::{RngCore, SeedableRng};
use ring30::{Ring30, Ring30R2};

/// Seed used consistently across all benchmarks.
const BENCH_SEED: u64 = 12345;

/// Buffer sizes for bulk reads (1 KiB and 32 KiB).
const READ_SIZES: [usize; 2] = [1 << 10, 32 << 10];

/// Benchmarks `fill()` throughput for both variants across buffer sizes.
///
/// The generator is created once and its stream advances naturally
/// between iterations.
fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");

    for &size in &READ_SIZES {
        group.throughput(Throughput::Bytes(size as u64));

        let mut rng = Ring30::new(BENCH_SEED);
        let mut buf = vec![0u8; size];
        group.bench_with_input(BenchmarkId::new("ring30", size), &size, |b, _| {
            b.iter(|| rng.fill(black_box(&mut buf)));
        });

        let mut rng = Ring30R2::new(BENCH_SEED);
        let mut buf = vec![0u8; size];
        group.bench_with_input(BenchmarkId::new("r30r2", size), &size, |b, _| {
            b.iter(|| rng.fill(black_box(&mut buf)));
        });
    }

    group.finish();
}

/// Benchmarks unaligned reads that exercise the leftover carry path.
fn bench_fill_unaligned(c: &mut Criterion) {
    let mut rng = Ring30::new(BENCH_SEED);
    let mut buf = [0u8; 13];

    let mut group = c.benchmark_group("fill_unaligned");
    group.throughput(Throughput::Bytes(buf.len() as u64));
    group.bench_function("13_bytes", |b| {
        b.iter(|| rng.fill(black_box(&mut buf)));
    });
    group.finish();
}

/// Benchmarks single-word extraction for both variants.
fn bench_next_u64(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_u64");
    group.throughput(Throughput::Bytes(8));

    let mut rng = Ring30::new(BENCH_SEED);
    group.bench_function("ring30", |b| b.iter(|| black_box(rng.next_u64())));

    let mut rng = Ring30R2::new(BENCH_SEED);
    group.bench_function("r30r2", |b| b.iter(|| black_box(rng.next_u64())));

    group.finish();
}

/// Benchmarks bounded sampling with a power-of-two and a rejection bound.
fn bench_bounded(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded");
    let mut rng = Ring30::new(BENCH_SEED);

    for bound in [1024i64, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(bound), &bound, |b, &n| {
            b.iter(|| black_box(rng.next_int_63_bounded(n)));
        });
    }

    group.finish();
}

/// Benchmarks the distribution accessors.
fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("distributions");
    let mut rng = Ring30::new(BENCH_SEED);

    group.bench_function("f64", |b| b.iter(|| black_box(rng.next_f64())));
    group.bench_function("normal", |b| b.iter(|| black_box(rng.next_norm_f64())));
    group.bench_function("exponential", |b| b.iter(|| black_box(rng.next_exp_f64())));

    group.finish();
}

/// Compares bulk reads and `next_u64` against `SmallRng` and `StdRng`.
fn bench_versus_rand(c: &mut Criterion) {
    let size = 32 << 10;
    let mut group = c.benchmark_group("versus_rand_read_32k");
    group.throughput(Throughput::Bytes(size as u64));

    let mut buf = vec![0u8; size];
    let mut ring = Ring30::new(BENCH_SEED);
    group.bench_function("ring30", |b| b.iter(|| ring.fill_bytes(black_box(&mut buf))));
    let mut small = SmallRng::seed_from_u64(BENCH_SEED);
    group.bench_function("small_rng", |b| {
        b.iter(|| small.fill_bytes(black_box(&mut buf)))
    });
    let mut std_rng = StdRng::seed_from_u64(BENCH_SEED);
    group.bench_function("std_rng", |b| {
        b.iter(|| std_rng.fill_bytes(black_box(&mut buf)))
    });
    group.finish();

    let mut group = c.benchmark_group("versus_rand_next_u64");
    group.throughput(Throughput::Bytes(8));
    group.bench_function("ring30", |b| b.iter(|| black_box(RngCore::next_u64(&mut ring))));
    group.bench_function("small_rng", |b| b.iter(|| black_box(small.next_u64())));
    group.bench_function("std_rng", |b| b.iter(|| black_box(std_rng.next_u64())));
    group.finish();
}

criterion_group!(
    benches,
    bench_fill,
    bench_fill_unaligned,
    bench_next_u64,
    bench_bounded,
    bench_distributions,
    bench_versus_rand,
);
criterion_main!(benches);
