//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod demo;
pub mod sample;

use tracing::info;
use variate_core::Sampler;

/// Builds the sampler a command will draw from, honouring an explicit
/// seed when one was given.
pub fn build_sampler(seed: Option<u64>) -> Sampler {
    let sampler = match seed {
        Some(seed) => Sampler::from_seed(seed),
        None => Sampler::new(),
    };
    info!(seed = sampler.seed(), "sampler initialised");
    sampler
}
