//! Storage error types for basin-store.

use basin_core::enums::ReportStatus;
use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity lookup returned no result.
    #[error("Not found: {entity_type} {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A report status transition was attempted that is not allowed.
    #[error("Invalid status transition: report {id} from {from} to {to}")]
    InvalidTransition {
        id: i64,
        from: ReportStatus,
        to: ReportStatus,
    },
}

impl StoreError {
    pub(crate) fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}
