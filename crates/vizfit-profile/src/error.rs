//! Error types for dataset profiling.

use thiserror::Error;

/// Errors raised when a profiled dataset cannot be classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProfileError {
    /// No type survives intersection at a column.
    #[error("dataset is inconsistent at column {column} ('{field}')")]
    Inconsistent { column: usize, field: String },
}

/// Result type for profiling operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
