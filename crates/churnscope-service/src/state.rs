//! Application state.

use churnscope_core::{QueryEngine, Table};

use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Query engine over the immutable customer table.
    pub engine: QueryEngine,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state around a loaded table.
    #[must_use]
    pub fn new(table: Table, config: ServiceConfig) -> Self {
        if table.is_empty() {
            tracing::warn!("Customer table is empty - every aggregate will be zero");
        }
        if table.categories().is_empty() {
            tracing::warn!("No product categories discovered - category endpoints will be empty");
        }

        Self {
            engine: QueryEngine::new(table),
            config,
        }
    }
}
