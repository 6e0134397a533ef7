//! Error types for record ingestion and normalization.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why an input produced no usable records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyInputReason {
    /// The input held no records at all.
    NoRecords,
    /// The winning keyset has no fields.
    EmptyKeyset,
    /// Merging found no field shared by every record.
    NoSharedKeys,
}

impl fmt::Display for EmptyInputReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EmptyInputReason::NoRecords => "no records",
            EmptyInputReason::EmptyKeyset => "empty keyset",
            EmptyInputReason::NoSharedKeys => "no shared keys",
        })
    }
}

/// Errors that can occur while reading or normalizing raw records.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    // === Input Errors ===
    /// The input yields no records or no readable schema.
    #[error("empty input: {reason}")]
    EmptyInput { reason: EmptyInputReason },

    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file exceeds the size limit.
    #[error("input file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File extension is not one of the supported formats.
    #[error("unsupported input format '{extension}' for {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Parse Errors ===
    /// Input is not valid JSON.
    #[error("failed to parse JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    /// Input is not valid CSV.
    #[error("failed to parse CSV: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// JSON parsed but is not a list of records or a feature collection.
    #[error("unsupported input shape: {reason}")]
    UnsupportedShape { reason: String },
}

impl IngestError {
    pub fn empty(reason: EmptyInputReason) -> Self {
        IngestError::EmptyInput { reason }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
