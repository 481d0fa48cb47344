//! Error types for structured error handling.
//!
//! The engine has a single error taxonomy: invalid-domain input. Every
//! sampling operation validates its documented parameter domain before
//! performing any computation and returns a [`DomainError`] immediately on
//! violation. There is no recovery layer; the caller decides whether to
//! retry with corrected parameters.

use thiserror::Error;

/// Parameter-domain violation reported by a sampling operation or
/// combinatorial primitive.
///
/// Each variant carries the offending value(s) so the caller can see what
/// was rejected without re-deriving it. Failure is always a returned value
/// of this type, never a panic.
///
/// # Examples
/// ```
/// use variate_core::types::DomainError;
///
/// let err = DomainError::EmptyRange { min: 5, max: 2 };
/// assert_eq!(format!("{}", err), "empty range: min 5 exceeds max 2");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainError {
    /// Integer range with `min > max`; no value can be drawn from it.
    #[error("empty range: min {min} exceeds max {max}")]
    EmptyRange {
        /// Lower bound of the requested range
        min: i64,
        /// Upper bound of the requested range
        max: i64,
    },

    /// Factorial of a negative number.
    #[error("factorial is undefined for negative n, got {n}")]
    NegativeFactorial {
        /// The rejected argument
        n: i64,
    },

    /// Integer gamma function outside its domain of positive integers.
    #[error("integer gamma function requires n > 0, got {n}")]
    GammaDomain {
        /// The rejected argument
        n: i64,
    },

    /// Non-positive rate parameter (exponential, poisson).
    #[error("rate parameter lambda must be positive, got {lambda}")]
    NonPositiveLambda {
        /// The rejected rate
        lambda: f64,
    },

    /// Logarithmic rate below 1, which would leave `p^rate / rate`
    /// ill-defined.
    #[error("logarithmic rate must be at least 1, got {rate}")]
    RateBelowOne {
        /// The rejected rate
        rate: i64,
    },

    /// Negative probability (bernoulli).
    #[error("probability must be non-negative, got {proba}")]
    NegativeProbability {
        /// The rejected probability
        proba: f64,
    },

    /// Non-positive shape parameter (beta, gamma).
    #[error("shape parameter {name} must be positive, got {value}")]
    NonPositiveShape {
        /// Which parameter was rejected ("alpha" or "beta")
        name: String,
        /// The rejected value
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range_display() {
        let err = DomainError::EmptyRange { min: 5, max: 2 };
        assert_eq!(format!("{}", err), "empty range: min 5 exceeds max 2");
    }

    #[test]
    fn test_negative_factorial_display() {
        let err = DomainError::NegativeFactorial { n: -1 };
        assert_eq!(
            format!("{}", err),
            "factorial is undefined for negative n, got -1"
        );
    }

    #[test]
    fn test_gamma_domain_display() {
        let err = DomainError::GammaDomain { n: 0 };
        assert_eq!(
            format!("{}", err),
            "integer gamma function requires n > 0, got 0"
        );
    }

    #[test]
    fn test_non_positive_lambda_display() {
        let err = DomainError::NonPositiveLambda { lambda: -0.5 };
        assert_eq!(
            format!("{}", err),
            "rate parameter lambda must be positive, got -0.5"
        );
    }

    #[test]
    fn test_rate_below_one_display() {
        let err = DomainError::RateBelowOne { rate: 0 };
        assert_eq!(format!("{}", err), "logarithmic rate must be at least 1, got 0");
    }

    #[test]
    fn test_negative_probability_display() {
        let err = DomainError::NegativeProbability { proba: -0.25 };
        assert_eq!(
            format!("{}", err),
            "probability must be non-negative, got -0.25"
        );
    }

    #[test]
    fn test_non_positive_shape_display() {
        let err = DomainError::NonPositiveShape {
            name: "alpha".to_string(),
            value: 0.0,
        };
        assert_eq!(
            format!("{}", err),
            "shape parameter alpha must be positive, got 0"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = DomainError::EmptyRange { min: 1, max: 0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = DomainError::NonPositiveLambda { lambda: 0.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_domain_error_serde_roundtrip() {
            let err = DomainError::NonPositiveShape {
                name: "beta".to_string(),
                value: -2.0,
            };
            let json = serde_json::to_string(&err).unwrap();
            let deserialized: DomainError = serde_json::from_str(&json).unwrap();
            assert_eq!(err, deserialized);
        }
    }
}
