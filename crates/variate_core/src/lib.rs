//! # variate_core: Distribution Sampling Engine
//!
//! A single-process pseudo-random sampler that converts a uniform random
//! source into numbers drawn from nine named probability distributions:
//! uniform, Gaussian, exponential, logarithmic, Poisson, Bernoulli,
//! binomial, beta, and gamma.
//!
//! ## Architecture
//!
//! Data flows one way through three small layers:
//!
//! - [`rng::VariateRng`]: seeded uniform source, one fresh value per draw
//! - [`math::combinatorics`]: factorial, binomial coefficient, integer
//!   gamma function (pure functions)
//! - [`distributions::Sampler`]: the nine public sampling operations
//!
//! The only mutable state in the crate is the generator state owned by
//! `VariateRng`, seeded exactly once at construction.
//!
//! ## Error Handling
//!
//! Every operation validates its parameter domain before computing and
//! returns [`types::DomainError`] on violation. Failure is always a
//! returned value, never a panic.
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::distributions::Sampler;
//!
//! let mut sampler = Sampler::from_seed(42);
//!
//! let u = sampler.uniform(0, 100).unwrap();
//! assert!((0.0..=100.0).contains(&u));
//!
//! let g = sampler.gaussian(50.0, 10.0);
//! assert!(g.is_finite());
//!
//! // Out-of-domain parameters are rejected, not computed:
//! assert!(sampler.exponential(-1.0, 5).is_err());
//! ```
//!
//! ## Fidelity Notes
//!
//! Several operations (exponential, poisson, beta, gamma) evaluate the
//! distribution's density at a randomly drawn point rather than drawing an
//! unbiased variate by inverse transform. This is the documented behaviour
//! of each operation, not an accident; see the per-operation docs on
//! [`distributions::Sampler`].
//!
//! ## Concurrency
//!
//! All sampling operations take `&mut self`, so a `Sampler` cannot be
//! shared across threads without external synchronisation. Concurrent
//! callers should either wrap the sampler in a `Mutex` or give each thread
//! its own instance; the formulas are stateless and safe to duplicate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distributions;
pub mod math;
pub mod rng;
pub mod types;

pub use distributions::{Sampler, DEFAULT_GAMMA_MAX};
pub use types::DomainError;
