//! CLI error types.

use thiserror::Error;
use variate_core::DomainError;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the CLI layer.
#[derive(Error, Debug)]
pub enum CliError {
    /// The requested distribution name is not one of the nine supported.
    #[error("unknown distribution '{0}' (expected one of: uniform, gaussian, exponential, logarithmic, poisson, bernoulli, binomial, beta, gamma)")]
    UnknownDistribution(String),

    /// A sampling parameter violated its documented domain.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
