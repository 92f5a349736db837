//! Filter options and summary handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use churnscope_core::{Facets, Summary};

use crate::state::AppState;

/// Distinct values for every filter control.
pub async fn filters(State(state): State<Arc<AppState>>) -> Json<Facets> {
    Json(state.engine.filters().clone())
}

/// Whole-table summary.
pub async fn summary(State(state): State<Arc<AppState>>) -> Json<Summary> {
    Json(state.engine.summary())
}
