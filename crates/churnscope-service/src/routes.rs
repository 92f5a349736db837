//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method, Uri};
use axum::routing::get;
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::handlers::{categories, customers, health, overview, segments};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// All routes are `GET` and live under `/api`:
///
/// - `/health` - Health check
/// - `/filters` - Distinct values for filter controls
/// - `/summary` - Whole-table headline numbers
/// - `/customers` - Filtered customer listing
/// - `/segment-stats` - Aggregates per segment
/// - `/category-revenue` - Revenue per product category
/// - `/churn-risk` - Aggregates per churn risk tier
/// - `/top-customers` - Top-N ranking by a metric
/// - `/product-group-metrics` - Engagement for one category
/// - `/product-brand-contributions` - Category shares within a filtered set
pub fn create_router(state: AppState) -> Router {
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let request_timeout_seconds = state.config.request_timeout_seconds;
    let max_concurrent_requests = state.config.max_concurrent_requests;

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route("/filters", get(overview::filters))
        .route("/summary", get(overview::summary))
        .route("/customers", get(customers::list_customers))
        .route("/segment-stats", get(segments::segment_stats))
        .route("/category-revenue", get(categories::category_revenue))
        .route("/churn-risk", get(segments::churn_risk))
        .route("/top-customers", get(customers::top_customers))
        .route(
            "/product-group-metrics",
            get(categories::product_group_metrics),
        )
        .route(
            "/product-brand-contributions",
            get(categories::product_brand_contributions),
        );

    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found)
        // Global middleware
        .layer(ConcurrencyLimitLayer::new(max_concurrent_requests))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        cors.allow_origin(origins)
    }
}
