//! Shared types for the sampling engine.
//!
//! Currently this is the error taxonomy; sampling parameters themselves
//! are plain numeric values passed per call.

mod error;

pub use error::DomainError;
