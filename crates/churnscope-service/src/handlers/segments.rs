//! Segment and churn risk aggregate handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use churnscope_core::{ChurnRiskStat, SegmentStat};

use crate::state::AppState;

/// Aggregates per customer segment.
pub async fn segment_stats(State(state): State<Arc<AppState>>) -> Json<Vec<SegmentStat>> {
    Json(state.engine.segment_stats())
}

/// Aggregates per churn risk tier.
pub async fn churn_risk(State(state): State<Arc<AppState>>) -> Json<Vec<ChurnRiskStat>> {
    Json(state.engine.churn_risk_stats())
}
