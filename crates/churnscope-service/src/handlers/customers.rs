//! Customer listing and ranking handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;

use churnscope_core::query::{DEFAULT_CUSTOMER_LIMIT, DEFAULT_TOP_LIMIT};
use churnscope_core::{CustomerFilter, CustomerList, TopCustomer, TopMetric};

use super::{int_param, QueryParams};
use crate::state::AppState;

/// Customer list query parameters.
#[derive(Debug, Default)]
pub struct CustomersQuery {
    /// Exact segment, or `all`.
    pub segment: Option<String>,
    /// Exact churn risk tier, or `all`.
    pub churn_risk: Option<String>,
    /// Exact CLTV tier, or `all`.
    pub cltv_segment: Option<String>,
    /// Category the customer visited, or `all`.
    pub category: Option<String>,
    /// Maximum rows to return (default: 100).
    pub limit: Option<String>,
}

impl From<QueryParams> for CustomersQuery {
    fn from(mut params: QueryParams) -> Self {
        Self {
            segment: params.take("segment"),
            churn_risk: params.take("churn_risk"),
            cltv_segment: params.take("cltv_segment"),
            category: params.take("category"),
            limit: params.take("limit"),
        }
    }
}

/// List customers matching the filters.
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
    query: Query<Vec<(String, String)>>,
) -> Json<CustomerList> {
    let params = CustomersQuery::from(QueryParams::from(query));
    let limit = int_param(params.limit.as_deref(), DEFAULT_CUSTOMER_LIMIT);
    let filter = CustomerFilter {
        segment: params.segment,
        churn_risk: params.churn_risk,
        cltv_segment: params.cltv_segment,
        category: params.category,
    };

    Json(state.engine.list_customers(&filter, limit))
}

/// Top customers query parameters.
#[derive(Debug, Default)]
pub struct TopCustomersQuery {
    /// Ranking metric (default: `cltv`).
    pub metric: Option<String>,
    /// Maximum rows to return (default: 10).
    pub limit: Option<String>,
}

impl From<QueryParams> for TopCustomersQuery {
    fn from(mut params: QueryParams) -> Self {
        Self {
            metric: params.take("metric"),
            limit: params.take("limit"),
        }
    }
}

/// Rank customers by a metric.
pub async fn top_customers(
    State(state): State<Arc<AppState>>,
    query: Query<Vec<(String, String)>>,
) -> Json<Vec<TopCustomer>> {
    let params = TopCustomersQuery::from(QueryParams::from(query));
    let metric = params
        .metric
        .as_deref()
        .map_or(TopMetric::default(), TopMetric::from_param);
    let limit = int_param(params.limit.as_deref(), DEFAULT_TOP_LIMIT);

    tracing::debug!(%metric, limit, "Ranking top customers");

    Json(state.engine.top_customers(metric, limit))
}
