//! Record array benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Construction from columns (1K to 1M records)
//! - Summation over integer and floating kinds, per reduction order
//! - Functional delta-add
//!
//! For serial execution, use `FASTRECARRAY_MODE=serial cargo bench`.
//! For parallel execution, use `FASTRECARRAY_MODE=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastRecarray::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTRECARRAY_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate floating columns with Gaussian noise.
fn generate_f64_columns(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();

    let xs: Vec<f64> = (0..size).map(|i| i as f64 * 0.01).collect();
    let ys: Vec<f64> = xs.iter().map(|&x| x + noise.sample(&mut rng)).collect();
    (xs, ys)
}

/// Generate uniformly distributed integer columns.
fn generate_i64_columns(size: usize, seed: u64) -> (Vec<i64>, Vec<i64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(-1_000_000i64, 1_000_000).unwrap();

    let xs: Vec<i64> = (0..size).map(|_| dist.sample(&mut rng)).collect();
    let ys: Vec<i64> = (0..size).map(|_| dist.sample(&mut rng)).collect();
    (xs, ys)
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_build(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("build_{}", mode_name));
    group.sample_size(50);

    for size in [1_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (xs, ys) = generate_f64_columns(size, 42);

        group.bench_with_input(BenchmarkId::new("f64", size), &size, |b, _| {
            b.iter(|| {
                if use_parallel {
                    build_parallel(black_box(&xs), black_box(&ys)).unwrap()
                } else {
                    FixedRecordArray::build(black_box(&xs), black_box(&ys)).unwrap()
                }
            })
        });
    }
    group.finish();
}

fn bench_sum_integer(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("sum_i64_{}", mode_name));
    group.sample_size(100);

    for size in [10_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (xs, ys) = generate_i64_columns(size, 7);
        let points = FixedRecordArray::build(&xs, &ys).unwrap();
        let summer = Summation::new().parallel(use_parallel).build().unwrap();

        group.bench_with_input(BenchmarkId::new("forward", size), &size, |b, _| {
            b.iter(|| summer.sum(black_box(&points)))
        });
        group.bench_with_input(BenchmarkId::new("pairwise", size), &size, |b, _| {
            b.iter(|| black_box(&points).sum_with(Pairwise))
        });
    }
    group.finish();
}

fn bench_sum_float(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_f64");
    group.sample_size(100);

    for size in [10_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (xs, ys) = generate_f64_columns(size, 11);
        let points = FixedRecordArray::build(&xs, &ys).unwrap();

        for order in [Forward, Reverse, Pairwise] {
            group.bench_with_input(BenchmarkId::new(order.to_string(), size), &size, |b, _| {
                b.iter(|| black_box(&points).sum_with(order))
            });
        }
    }
    group.finish();
}

fn bench_map_add(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("map_add_{}", mode_name));
    group.sample_size(50);

    for size in [10_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let (xs, ys) = generate_f64_columns(size, 3);
        let points = FixedRecordArray::build(&xs, &ys).unwrap();
        let delta = Record::new(0.5, -0.5);

        group.bench_with_input(BenchmarkId::new("f64", size), &size, |b, _| {
            b.iter(|| {
                if use_parallel {
                    black_box(&points).par_map_add_scalar(delta)
                } else {
                    black_box(&points).map_add_scalar(delta)
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_sum_integer,
    bench_sum_float,
    bench_map_add,
);

criterion_main!(benches);
