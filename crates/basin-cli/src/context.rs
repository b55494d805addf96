//! Per-invocation application context.

use std::sync::Arc;

use basin_config::BasinConfig;
use basin_store::MemStore;
use chrono::Utc;

/// Everything a command handler needs: the loaded configuration and the
/// seeded in-memory store.
///
/// The store is rebuilt from seed data on every invocation; there is no
/// persistence between runs.
pub struct AppContext {
    pub config: BasinConfig,
    pub store: Arc<MemStore>,
}

impl AppContext {
    /// Build a context with a freshly seeded store.
    #[must_use]
    pub fn init(config: BasinConfig) -> Self {
        Self {
            config,
            store: Arc::new(MemStore::seeded(Utc::now())),
        }
    }
}
