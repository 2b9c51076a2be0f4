// File: crates/series-core/src/error.rs
// Summary: Error taxonomy for reshaping (configuration vs per-record data errors).

use thiserror::Error;

/// Errors returned by the reshaper.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReshapeError {
    /// The series configuration is unusable (e.g. no descriptors at all).
    /// Callers should treat this as a programming error.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A selector could not resolve a finite value on one record.
    #[error("series '{series}': field '{field}' missing for period '{period}'")]
    FieldMissing {
        series: String,
        field: String,
        period: String,
    },

    /// A running total left the finite range (accumulated series only).
    #[error("series '{series}': running total is not finite at period '{period}'")]
    NonFiniteTotal {
        series: String,
        period: String,
    },
}

/// Type alias for Result with ReshapeError
pub type Result<T> = std::result::Result<T, ReshapeError>;
