//! Error types for chart catalog loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a chart catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// A chart spec is missing a required field or has invalid content.
    #[error("Malformed chart spec in {origin}: {reason}")]
    MalformedSpec { origin: String, reason: String },

    /// Two specs in one catalog share a title.
    #[error("Duplicate chart title '{title}' in {origin}")]
    DuplicateTitle { title: String, origin: String },

    /// Catalog directory not found.
    #[error("Chart catalog directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read a catalog file or directory.
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog file is not valid JSON.
    #[error("Invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// The global catalog was already installed.
    #[error("Global chart catalog is already initialized")]
    AlreadyInitialized,
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
