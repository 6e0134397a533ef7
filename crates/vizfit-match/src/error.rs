//! Error types for the classification pipeline.

use thiserror::Error;
use vizfit_ingest::IngestError;
use vizfit_profile::ProfileError;

/// Errors that stop a dataset from being classified.
///
/// A chart failing its constraints is not an error; see
/// [`Rejection`](crate::Rejection).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClassifyError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, ClassifyError>;
