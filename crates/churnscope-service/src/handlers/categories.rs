//! Product category handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;

use churnscope_core::{BrandContributions, CategoryRevenue, CustomerFilter, ProductGroupReport};

use super::QueryParams;
use crate::state::AppState;

/// Revenue per product category.
pub async fn category_revenue(State(state): State<Arc<AppState>>) -> Json<Vec<CategoryRevenue>> {
    Json(state.engine.category_revenue())
}

/// Product group query parameters.
#[derive(Debug, Default)]
pub struct ProductGroupQuery {
    /// Category name (default: empty).
    pub group: String,
}

impl From<QueryParams> for ProductGroupQuery {
    fn from(mut params: QueryParams) -> Self {
        Self {
            group: params.take("group").unwrap_or_default(),
        }
    }
}

/// Engagement metrics for one product group.
///
/// Empty and unknown groups are answered with a `200` placeholder or error
/// payload, never an HTTP error.
pub async fn product_group_metrics(
    State(state): State<Arc<AppState>>,
    query: Query<Vec<(String, String)>>,
) -> Json<ProductGroupReport> {
    let params = ProductGroupQuery::from(QueryParams::from(query));
    tracing::debug!(group = %params.group, "Computing product group metrics");

    Json(state.engine.product_group_metrics(&params.group))
}

/// Contribution query parameters.
#[derive(Debug, Default)]
pub struct ContributionsQuery {
    /// Exact segment, or `all`.
    pub segment: Option<String>,
    /// Exact churn risk tier, or `all`.
    pub churn_risk: Option<String>,
    /// Exact CLTV tier, or `all`.
    pub cltv_segment: Option<String>,
}

impl From<QueryParams> for ContributionsQuery {
    fn from(mut params: QueryParams) -> Self {
        Self {
            segment: params.take("segment"),
            churn_risk: params.take("churn_risk"),
            cltv_segment: params.take("cltv_segment"),
        }
    }
}

/// Category contributions within a filtered set of customers.
pub async fn product_brand_contributions(
    State(state): State<Arc<AppState>>,
    query: Query<Vec<(String, String)>>,
) -> Json<BrandContributions> {
    let params = ContributionsQuery::from(QueryParams::from(query));
    let filter = CustomerFilter {
        segment: params.segment,
        churn_risk: params.churn_risk,
        cltv_segment: params.cltv_segment,
        category: None,
    };

    Json(state.engine.brand_contributions(&filter))
}
