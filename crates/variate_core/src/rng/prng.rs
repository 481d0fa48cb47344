//! Seeded pseudo-random number generator wrapper.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::DomainError;

/// Seeded uniform randomness source.
///
/// Owns the generator state and the seed it was constructed with. Each
/// draw mutates the internal state; the seed is never re-applied after
/// construction, so repeated draws on one instance never replay the same
/// value stream.
///
/// # Examples
///
/// ```rust
/// use variate_core::rng::VariateRng;
///
/// let mut rng = VariateRng::from_seed(42);
///
/// let u = rng.gen_uniform();
/// assert!(u >= 0.0 && u < 1.0);
///
/// let n = rng.gen_uniform_int(1, 6).unwrap();
/// assert!((1..=6).contains(&n));
/// ```
pub struct VariateRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used at construction (kept for reproducibility tracking).
    seed: u64,
}

impl VariateRng {
    /// Creates a generator initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of draws, which is
    /// the hook deterministic tests rely on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variate_core::rng::VariateRng;
    ///
    /// let mut rng1 = VariateRng::from_seed(12345);
    /// let mut rng2 = VariateRng::from_seed(12345);
    /// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator with a fresh, unpredictable seed.
    ///
    /// The seed is drawn from process entropy once and then fixed for the
    /// lifetime of the instance. It remains observable through
    /// [`VariateRng::seed`], so a session can be replayed by passing the
    /// logged seed to [`VariateRng::from_seed`].
    #[inline]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Returns the seed used at construction.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws one uniform value in the half-open interval [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Draws one uniform integer in the closed interval [min, max].
    ///
    /// # Arguments
    ///
    /// * `min` - Inclusive lower bound
    /// * `max` - Inclusive upper bound
    ///
    /// # Returns
    ///
    /// * `Ok(n)` with `min <= n <= max`
    /// * `Err(DomainError::EmptyRange)` when `min > max`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variate_core::rng::VariateRng;
    ///
    /// let mut rng = VariateRng::from_seed(42);
    /// assert!(rng.gen_uniform_int(0, 10).is_ok());
    /// assert!(rng.gen_uniform_int(5, 2).is_err());
    /// ```
    #[inline]
    pub fn gen_uniform_int(&mut self, min: i64, max: i64) -> Result<i64, DomainError> {
        if min > max {
            return Err(DomainError::EmptyRange { min, max });
        }
        Ok(self.inner.gen_range(min..=max))
    }
}

impl std::fmt::Debug for VariateRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariateRng").field("seed", &self.seed).finish()
    }
}
