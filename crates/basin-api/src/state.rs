//! Application state for the API.

use std::sync::Arc;

use basin_store::MemStore;

/// Shared application state, cloned into each request handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<MemStore>,
}

impl AppState {
    /// Create state around a shared store.
    #[must_use]
    pub const fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// The shared store handle.
    #[must_use]
    pub fn store(&self) -> &MemStore {
        &self.store
    }
}
