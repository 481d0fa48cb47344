//! Criterion benchmarks for the distribution sampling operations.
//!
//! Measures single-draw latency per distribution and the combinatorial
//! cost of the recursive binomial coefficient across trial counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use variate_core::distributions::{Sampler, DEFAULT_GAMMA_MAX};
use variate_core::math::combinatorics::binomial_coefficient;

/// Benchmark one draw from each distribution.
fn bench_single_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_draw");

    group.bench_function("uniform", |b| {
        let mut sampler = Sampler::from_seed(42);
        b.iter(|| sampler.uniform(black_box(0), black_box(100)).unwrap());
    });

    group.bench_function("gaussian", |b| {
        let mut sampler = Sampler::from_seed(42);
        b.iter(|| sampler.gaussian(black_box(50.0), black_box(10.0)));
    });

    group.bench_function("exponential", |b| {
        let mut sampler = Sampler::from_seed(42);
        b.iter(|| sampler.exponential(black_box(2.0), black_box(5)).unwrap());
    });

    group.bench_function("logarithmic", |b| {
        let mut sampler = Sampler::from_seed(42);
        b.iter(|| sampler.logarithmic(black_box(4)).unwrap());
    });

    group.bench_function("poisson", |b| {
        let mut sampler = Sampler::from_seed(42);
        b.iter(|| sampler.poisson(black_box(10.0), black_box(10)).unwrap());
    });

    group.bench_function("bernoulli", |b| {
        let mut sampler = Sampler::from_seed(42);
        b.iter(|| sampler.bernoulli(black_box(0.5)).unwrap());
    });

    group.bench_function("beta", |b| {
        let mut sampler = Sampler::from_seed(42);
        b.iter(|| sampler.beta(black_box(2.0), black_box(2.0)).unwrap());
    });

    group.bench_function("gamma", |b| {
        let mut sampler = Sampler::from_seed(42);
        b.iter(|| {
            sampler
                .gamma(black_box(4.0), black_box(2.5), black_box(DEFAULT_GAMMA_MAX))
                .unwrap()
        });
    });

    group.finish();
}

/// Benchmark the binomial acceptance walk as trial count grows.
///
/// The recursive coefficient dominates; this characterises how quickly the
/// walk becomes unaffordable.
fn bench_binomial_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial_scaling");

    for num_trials in [5u32, 10, 15, 20] {
        group.bench_with_input(
            BenchmarkId::new("sample", num_trials),
            &num_trials,
            |b, &n| {
                let mut sampler = Sampler::from_seed(42);
                b.iter(|| sampler.binomial(black_box(n), black_box(0.5)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("coefficient_mid", num_trials),
            &num_trials,
            |b, &n| {
                b.iter(|| binomial_coefficient(black_box(n), black_box(n / 2)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_draws, bench_binomial_scaling);
criterion_main!(benches);
