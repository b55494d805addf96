//! Engine error types.

use basin_store::error::StoreError;
use thiserror::Error;

/// Errors from the report submission pipeline.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The report names a zone the store does not know.
    #[error("Unknown zone: {0}")]
    UnknownZone(String),

    /// A required free-text field is empty.
    #[error("Validation error: {field} must not be empty")]
    EmptyField { field: &'static str },

    /// Underlying store error.
    #[error(transparent)]
    Store(#[from] StoreError),
}
