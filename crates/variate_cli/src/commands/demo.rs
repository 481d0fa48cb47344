//! Demo command: one draw from each distribution.
//!
//! Reproduces the canonical walkthrough of the engine: a single sampler
//! instance is constructed once, then each of the nine operations is
//! called with its conventional demonstration parameters and the result is
//! printed to standard output.

use crate::Result;
use variate_core::DEFAULT_GAMMA_MAX;

/// Runs the nine-distribution demonstration.
///
/// # Arguments
///
/// * `seed` - Explicit sampler seed; entropy-seeded when `None`
///
/// # Returns
///
/// `Ok(())` on success, `Err` when a draw rejects its parameters.
pub fn run(seed: Option<u64>) -> Result<()> {
    let mut sampler = super::build_sampler(seed);

    println!("========================================");
    println!("Distribution Sampling Demo");
    println!("========================================");
    println!();

    println!("{:<14} {}", "uniform:", sampler.uniform(0, 100)?);
    println!("{:<14} {}", "gaussian:", sampler.gaussian(50.0, 10.0));
    println!("{:<14} {}", "exponential:", sampler.exponential(2.0, 5)?);
    println!("{:<14} {}", "logarithmic:", sampler.logarithmic(4)?);
    println!("{:<14} {}", "poisson:", sampler.poisson(10.0, 10)?);
    println!("{:<14} {}", "bernoulli:", sampler.bernoulli(0.5)?);
    println!("{:<14} {}", "binomial:", sampler.binomial(10, 0.5));
    println!("{:<14} {}", "beta:", sampler.beta(2.0, 2.0)?);
    println!(
        "{:<14} {}",
        "gamma:",
        sampler.gamma(4.0, 2.5, DEFAULT_GAMMA_MAX)?
    );

    Ok(())
}
