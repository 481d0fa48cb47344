//! Combinatorial primitives: factorial, binomial coefficient, and the
//! integer gamma function.
//!
//! These are pure functions; the distribution operations call them with
//! already-validated working values, but each function still guards its
//! own domain where the contract says so.

use crate::types::DomainError;

/// Factorial of a non-negative integer, as `f64`.
///
/// Returns 1 for `n = 0` and the exact product `1 * 2 * ... * n`
/// otherwise. Values overflow to `f64::INFINITY` past `n = 170`.
///
/// # Arguments
///
/// * `n` - The number to take the factorial of
///
/// # Returns
///
/// * `Ok(n!)` for `n >= 0`
/// * `Err(DomainError::NegativeFactorial)` for `n < 0`
///
/// # Examples
///
/// ```
/// use variate_core::math::combinatorics::factorial;
///
/// assert_eq!(factorial(0).unwrap(), 1.0);
/// assert_eq!(factorial(5).unwrap(), 120.0);
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<f64, DomainError> {
    if n < 0 {
        return Err(DomainError::NegativeFactorial { n });
    }

    let mut product = 1.0;
    for i in 1..=n {
        product *= i as f64;
    }
    Ok(product)
}

/// Binomial coefficient `C(n, k)` by Pascal's rule.
///
/// Computed with the recursive definition
/// `C(n, k) = C(n - 1, k - 1) + C(n - 1, k)` and base case
/// `C(n, 0) = C(n, n) = 1`, so the values are the recursion's by
/// construction. Call count grows combinatorially with `n`; keep `n`
/// small.
///
/// Callers must uphold `0 <= k <= n`; there is no guard beyond a debug
/// assertion.
///
/// # Examples
///
/// ```
/// use variate_core::math::combinatorics::binomial_coefficient;
///
/// assert_eq!(binomial_coefficient(5, 0), 1.0);
/// assert_eq!(binomial_coefficient(5, 5), 1.0);
/// assert_eq!(binomial_coefficient(5, 2), 10.0);
/// ```
pub fn binomial_coefficient(n: u32, k: u32) -> f64 {
    debug_assert!(k <= n, "binomial_coefficient requires k <= n");

    if k == 0 || k == n {
        return 1.0;
    }
    binomial_coefficient(n - 1, k - 1) + binomial_coefficient(n - 1, k)
}

/// Integer gamma function: `Γ(n) = (n - 1)!` for positive integer `n`.
///
/// This is the factorial-based simplification, not the continuous gamma
/// function; it is defined only on positive integers.
///
/// # Returns
///
/// * `Ok((n - 1)!)` for `n > 0`
/// * `Err(DomainError::GammaDomain)` for `n <= 0`
///
/// # Examples
///
/// ```
/// use variate_core::math::combinatorics::gamma_function;
///
/// assert_eq!(gamma_function(1).unwrap(), 1.0); // 0!
/// assert_eq!(gamma_function(5).unwrap(), 24.0); // 4!
/// assert!(gamma_function(0).is_err());
/// ```
pub fn gamma_function(n: i64) -> Result<f64, DomainError> {
    if n <= 0 {
        return Err(DomainError::GammaDomain { n });
    }
    factorial(n - 1)
}
