//! Cross-cutting error types for Basin.
//!
//! Domain-specific errors (e.g., `StoreError`, `ConfigError`, `ApiError`)
//! are defined in their respective crates; everything converges on `anyhow`
//! in the `bsn` binary. `CoreError` covers validation of the fixed-choice
//! mockup surfaces, which no other crate owns.

use thiserror::Error;

/// Errors that can be raised by any Basin crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, fixed-choice membership, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
