//! Distribution sampling operations.
//!
//! [`Sampler`] owns one [`VariateRng`] and exposes one operation per
//! distribution. Every operation follows the same discipline: validate the
//! parameter domain first, return [`DomainError`] immediately on violation
//! (no partial computation), then compute a value from one or more fresh
//! uniform draws.
//!
//! Two kinds of draw feed the formulas. Exponential, poisson and gamma
//! pull their working variable through [`Sampler::uniform`], a bounded
//! integer draw over a caller-supplied range. Gaussian, logarithmic,
//! bernoulli, binomial and beta draw raw [0, 1) floats directly from the
//! generator.
//!
//! # What the formulas compute
//!
//! `uniform`, `gaussian`, `bernoulli` and `binomial` produce draws in the
//! usual sense. `exponential`, `poisson`, `beta` and `gamma` instead
//! evaluate the named distribution's density at a randomly drawn point,
//! and `logarithmic` evaluates its mass formula at a random probability;
//! their outputs are not unbiased variates of the named distribution. Each
//! operation's doc states its exact formula, and that formula is the
//! contract.

use crate::math::combinatorics::{binomial_coefficient, factorial, gamma_function};
use crate::rng::VariateRng;
use crate::types::DomainError;

/// Default upper bound for the gamma operation's working draw.
///
/// Rust has no default arguments; callers wanting the conventional bound
/// pass this constant to [`Sampler::gamma`].
pub const DEFAULT_GAMMA_MAX: i64 = 50;

/// Pseudo-random sampler over nine named probability distributions.
///
/// A `Sampler` owns its generator state, seeded exactly once at
/// construction and advanced on every draw. Constructing with
/// [`Sampler::from_seed`] makes the full output sequence deterministic;
/// [`Sampler::new`] seeds from process entropy.
///
/// # Concurrency
///
/// Operations take `&mut self`; a `Sampler` is not shareable across
/// threads without external synchronisation. Wrap it in a `Mutex` or give
/// each thread its own instance — the formulas carry no state of their
/// own.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::Sampler;
///
/// let mut sampler = Sampler::from_seed(42);
///
/// // A whole number in [0, 100]:
/// let u = sampler.uniform(0, 100).unwrap();
/// assert_eq!(u, u.floor());
///
/// // Invalid domains are errors, never panics:
/// assert!(sampler.uniform(5, 2).is_err());
/// ```
#[derive(Debug)]
pub struct Sampler {
    rng: VariateRng,
}

impl Sampler {
    /// Creates a sampler seeded from process entropy.
    ///
    /// The seed is fixed at construction and never re-applied; see
    /// [`Sampler::seed`] to recover it for replay.
    pub fn new() -> Self {
        Self {
            rng: VariateRng::from_entropy(),
        }
    }

    /// Creates a sampler with an explicit seed.
    ///
    /// Two samplers built from the same seed produce identical output
    /// sequences for identical call sequences, which is the hook
    /// deterministic tests use.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: VariateRng::from_seed(seed),
        }
    }

    /// Returns the construction seed.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Draws a uniform whole number in [min, max], inclusive of both ends.
    ///
    /// The result is an integer value represented as `f64`, the common
    /// numeric type of every operation in this engine. Several other
    /// operations (exponential, poisson, gamma) use this as their bounded
    /// working draw.
    ///
    /// # Returns
    ///
    /// * `Ok(x)` with `min <= x <= max` and `x == x.floor()`
    /// * `Err(DomainError::EmptyRange)` when `min > max`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variate_core::distributions::Sampler;
    ///
    /// let mut sampler = Sampler::from_seed(42);
    /// let x = sampler.uniform(-5, 5).unwrap();
    /// assert!((-5.0..=5.0).contains(&x));
    /// ```
    pub fn uniform(&mut self, min: i64, max: i64) -> Result<f64, DomainError> {
        Ok(self.rng.gen_uniform_int(min, max)? as f64)
    }

    /// Draws a Gaussian-distributed value via the Box-Muller transform.
    ///
    /// Two independent uniform draws u1, u2 are combined as
    /// `z0 = sqrt(-2 ln u1) * cos(2 pi u2)`, then scaled and shifted to
    /// `mean + stddev * z0`.
    ///
    /// No parameter domain is enforced: `stddev <= 0` degenerates the
    /// spread, and the rare draw `u1 = 0` propagates a non-finite value
    /// through `ln`. Both are caller responsibility.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variate_core::distributions::Sampler;
    ///
    /// let mut sampler = Sampler::from_seed(42);
    /// let g = sampler.gaussian(50.0, 10.0);
    /// assert!(g.is_finite());
    /// ```
    pub fn gaussian(&mut self, mean: f64, stddev: f64) -> f64 {
        let u1 = self.rng.gen_uniform();
        let u2 = self.rng.gen_uniform();
        let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + stddev * z0
    }

    /// Evaluates the exponential density `lambda * e^(-lambda * u)` at a
    /// bounded uniform draw `u` from [0, max].
    ///
    /// # Arguments
    ///
    /// * `lambda` - Rate parameter, must be positive
    /// * `max` - Inclusive upper bound for the working draw
    ///
    /// # Returns
    ///
    /// * `Ok(value)` on success
    /// * `Err(DomainError::NonPositiveLambda)` when `lambda <= 0`
    /// * `Err(DomainError::EmptyRange)` when `max < 0`
    pub fn exponential(&mut self, lambda: f64, max: i64) -> Result<f64, DomainError> {
        if lambda <= 0.0 {
            return Err(DomainError::NonPositiveLambda { lambda });
        }

        let u = self.uniform(0, max)?;
        Ok(lambda * (-lambda * u).exp())
    }

    /// Evaluates the logarithmic mass formula
    /// `(-1 / ln(1 - p)) * (p^rate / rate)` at a raw uniform draw `p`.
    ///
    /// `rate` below 1 would leave `p^rate / rate` ill-defined, so it is
    /// rejected. A draw of exactly `p = 0` yields NaN through `-1/ln(1)`;
    /// that is the formula's own value at that point.
    ///
    /// # Returns
    ///
    /// * `Ok(value)` on success
    /// * `Err(DomainError::RateBelowOne)` when `rate < 1`
    pub fn logarithmic(&mut self, rate: i64) -> Result<f64, DomainError> {
        if rate < 1 {
            return Err(DomainError::RateBelowOne { rate });
        }

        let p = self.rng.gen_uniform();
        Ok((-1.0 / (1.0 - p).ln()) * (p.powf(rate as f64) / rate as f64))
    }

    /// Evaluates the Poisson mass `lambda^u * e^(-lambda) / u!` at a
    /// bounded uniform draw `u` from [0, max].
    ///
    /// # Arguments
    ///
    /// * `lambda` - Mean event rate, must be positive
    /// * `max` - Inclusive upper bound for the working draw
    ///
    /// # Returns
    ///
    /// * `Ok(value)` on success
    /// * `Err(DomainError::NonPositiveLambda)` when `lambda <= 0`
    /// * `Err(DomainError::EmptyRange)` when `max < 0`
    pub fn poisson(&mut self, lambda: f64, max: i64) -> Result<f64, DomainError> {
        if lambda <= 0.0 {
            return Err(DomainError::NonPositiveLambda { lambda });
        }

        let u = self.uniform(0, max)?;
        // u is a non-negative whole number, so the factorial cannot fail.
        Ok(lambda.powf(u) * (-lambda).exp() / factorial(u as i64)?)
    }

    /// Draws a Bernoulli trial outcome: exactly 1.0 or 0.0.
    ///
    /// A raw uniform draw `u` decides the outcome: 1 when `proba < u`,
    /// otherwise 0. Probabilities above 1 are accepted and simply pin the
    /// outcome to 0.
    ///
    /// # Returns
    ///
    /// * `Ok(1.0)` or `Ok(0.0)`
    /// * `Err(DomainError::NegativeProbability)` when `proba < 0`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variate_core::distributions::Sampler;
    ///
    /// let mut sampler = Sampler::from_seed(42);
    /// let b = sampler.bernoulli(0.5).unwrap();
    /// assert!(b == 0.0 || b == 1.0);
    /// ```
    pub fn bernoulli(&mut self, proba: f64) -> Result<f64, DomainError> {
        if proba < 0.0 {
            return Err(DomainError::NegativeProbability { proba });
        }

        let u = self.rng.gen_uniform();
        Ok(if proba < u { 1.0 } else { 0.0 })
    }

    /// Draws a success count from an acceptance walk over the binomial
    /// mass function.
    ///
    /// For each `k` in `0..=num_trials`, the mass
    /// `C(n, k) * proba^k * (1 - proba)^(n - k)` is compared against a
    /// fresh uniform draw; the first `k` whose draw falls below its mass
    /// is returned. If no `k` is accepted the count is 0. At most
    /// `num_trials + 1` iterations run.
    ///
    /// This is an acceptance procedure, not an unbiased binomial variate
    /// generator. No guard is placed on `proba`; values outside [0, 1]
    /// degenerate the masses and the walk simply returns 0.
    ///
    /// The binomial coefficient is evaluated with its recursive
    /// definition, so keep `num_trials` modest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variate_core::distributions::Sampler;
    ///
    /// let mut sampler = Sampler::from_seed(42);
    /// let k = sampler.binomial(10, 0.5);
    /// assert!(k >= 0.0 && k <= 10.0);
    /// assert_eq!(k, k.floor());
    /// ```
    pub fn binomial(&mut self, num_trials: u32, proba: f64) -> f64 {
        for k in 0..=num_trials {
            let mass = binomial_coefficient(num_trials, k)
                * proba.powi(k as i32)
                * (1.0 - proba).powi((num_trials - k) as i32);
            let u = self.rng.gen_uniform();

            if u < mass {
                return f64::from(k);
            }
        }
        0.0
    }

    /// Evaluates the beta density kernel `u^(alpha-1) * (1-u)^(beta-1)` at
    /// a raw uniform draw `u`.
    ///
    /// # Arguments
    ///
    /// * `alpha` - Left shape parameter, must be positive
    /// * `beta` - Right shape parameter, must be positive
    ///
    /// # Returns
    ///
    /// * `Ok(value)` on success
    /// * `Err(DomainError::NonPositiveShape)` when either shape is
    ///   non-positive
    pub fn beta(&mut self, alpha: f64, beta: f64) -> Result<f64, DomainError> {
        if alpha <= 0.0 {
            return Err(DomainError::NonPositiveShape {
                name: "alpha".to_string(),
                value: alpha,
            });
        }
        if beta <= 0.0 {
            return Err(DomainError::NonPositiveShape {
                name: "beta".to_string(),
                value: beta,
            });
        }

        let u = self.rng.gen_uniform();
        Ok(u.powf(alpha - 1.0) * (1.0 - u).powf(beta - 1.0))
    }

    /// Evaluates the gamma density
    /// `u^(alpha-1) * e^(-beta*u) * beta^alpha / Γ(alpha)` at a bounded
    /// uniform draw `u` from [0, max].
    ///
    /// `Γ` is the integer gamma function, applied to `alpha` truncated
    /// toward zero; a fractional `alpha` below 1 therefore fails the gamma
    /// domain check even though it passes the positivity check.
    ///
    /// # Arguments
    ///
    /// * `alpha` - Shape parameter, must be positive
    /// * `beta` - Rate parameter, must be positive
    /// * `max` - Inclusive upper bound for the working draw; pass
    ///   [`DEFAULT_GAMMA_MAX`] for the conventional bound
    ///
    /// # Returns
    ///
    /// * `Ok(value)` on success
    /// * `Err(DomainError::NonPositiveShape)` when either parameter is
    ///   non-positive
    /// * `Err(DomainError::GammaDomain)` when `alpha` truncates to 0
    /// * `Err(DomainError::EmptyRange)` when `max < 0`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use variate_core::distributions::{Sampler, DEFAULT_GAMMA_MAX};
    ///
    /// let mut sampler = Sampler::from_seed(42);
    /// let g = sampler.gamma(4.0, 2.5, DEFAULT_GAMMA_MAX).unwrap();
    /// assert!(g >= 0.0);
    /// ```
    pub fn gamma(&mut self, alpha: f64, beta: f64, max: i64) -> Result<f64, DomainError> {
        if alpha <= 0.0 {
            return Err(DomainError::NonPositiveShape {
                name: "alpha".to_string(),
                value: alpha,
            });
        }
        if beta <= 0.0 {
            return Err(DomainError::NonPositiveShape {
                name: "beta".to_string(),
                value: beta,
            });
        }

        let u = self.uniform(0, max)?;
        let gamma_of_alpha = gamma_function(alpha as i64)?;
        Ok(u.powf(alpha - 1.0) * (-beta * u).exp() * beta.powf(alpha) / gamma_of_alpha)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
