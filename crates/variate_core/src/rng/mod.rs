//! Uniform randomness source.
//!
//! This module provides [`VariateRng`], the seeded pseudo-random source
//! every distribution operation draws from. Design points:
//!
//! - **Seed once, at construction.** The generator state is initialised
//!   exactly once per instance and mutated internally on each draw.
//!   Re-seeding inside a sampling call is the classic defect that makes
//!   successive calls return identical values; the API makes it
//!   unrepresentable.
//! - **Reproducibility.** [`VariateRng::from_seed`] gives deterministic
//!   sequences; the construction seed stays observable via
//!   [`VariateRng::seed`].
//! - **Quality.** Backed by `rand::rngs::StdRng`; not cryptographically
//!   secure, and not intended to be.

mod prng;

pub use prng::VariateRng;
