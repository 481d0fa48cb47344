//! Verifies the public API surface of variate_core.

use variate_core::distributions::{Sampler, DEFAULT_GAMMA_MAX};
use variate_core::math::combinatorics::{binomial_coefficient, factorial, gamma_function};
use variate_core::rng::VariateRng;
use variate_core::types::DomainError;

#[test]
fn test_crate_root_re_exports() {
    // Sampler, DEFAULT_GAMMA_MAX and DomainError are reachable from the
    // crate root as well as their home modules.
    let _: variate_core::Sampler = variate_core::Sampler::from_seed(1);
    assert_eq!(variate_core::DEFAULT_GAMMA_MAX, 50);
    let _: variate_core::DomainError = DomainError::EmptyRange { min: 1, max: 0 };
}

#[test]
fn test_rng_surface() {
    let mut rng = VariateRng::from_seed(42);
    let _seed: u64 = rng.seed();
    let _u: f64 = rng.gen_uniform();
    let _n: i64 = rng.gen_uniform_int(0, 10).unwrap();
}

#[test]
fn test_combinatorics_surface() {
    assert_eq!(factorial(5).unwrap(), 120.0);
    assert_eq!(binomial_coefficient(5, 2), 10.0);
    assert_eq!(gamma_function(5).unwrap(), 24.0);
}

#[test]
fn test_every_operation_is_callable() {
    let mut sampler = Sampler::from_seed(42);

    let _ = sampler.uniform(0, 100).unwrap();
    let _ = sampler.gaussian(50.0, 10.0);
    let _ = sampler.exponential(2.0, 5).unwrap();
    let _ = sampler.logarithmic(4).unwrap();
    let _ = sampler.poisson(10.0, 10).unwrap();
    let _ = sampler.bernoulli(0.5).unwrap();
    let _ = sampler.binomial(10, 0.5);
    let _ = sampler.beta(2.0, 2.0).unwrap();
    let _ = sampler.gamma(4.0, 2.5, DEFAULT_GAMMA_MAX).unwrap();
}

#[test]
fn test_domain_errors_across_operations() {
    let mut sampler = Sampler::from_seed(42);

    assert!(sampler.uniform(5, 2).is_err());
    assert!(sampler.exponential(-1.0, 5).is_err());
    assert!(sampler.exponential(0.0, 99).is_err());
    assert!(sampler.logarithmic(0).is_err());
    assert!(sampler.poisson(0.0, 10).is_err());
    assert!(sampler.bernoulli(-0.5).is_err());
    assert!(sampler.beta(0.0, 1.0).is_err());
    assert!(sampler.beta(1.0, 0.0).is_err());
    assert!(sampler.gamma(0.0, 1.0, DEFAULT_GAMMA_MAX).is_err());
    assert!(sampler.gamma(1.0, 0.0, DEFAULT_GAMMA_MAX).is_err());
}
