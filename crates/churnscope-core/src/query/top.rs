//! Top-N customer ranking.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::QueryEngine;
use crate::cell::Cell;
use crate::record::CustomerRecord;

/// Row limit used when the caller does not supply one.
pub const DEFAULT_TOP_LIMIT: i64 = 10;

/// Metrics customers can be ranked by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TopMetric {
    /// Customer lifetime value.
    #[default]
    Cltv,
    /// Revenue across all categories.
    OverallRevenue,
    /// Visits across all categories.
    OverallVisits,
}

impl TopMetric {
    /// Parse a metric name, falling back to [`TopMetric::Cltv`] for anything
    /// outside the allow-list.
    #[must_use]
    pub fn from_param(name: &str) -> Self {
        match name {
            "overall_revenue" => Self::OverallRevenue,
            "overall_visits" => Self::OverallVisits,
            _ => Self::Cltv,
        }
    }

    /// The column name of the metric.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cltv => "cltv",
            Self::OverallRevenue => "overall_revenue",
            Self::OverallVisits => "overall_visits",
        }
    }

    fn value(self, record: &CustomerRecord) -> f64 {
        match self {
            Self::Cltv => record.cltv,
            Self::OverallRevenue => record.overall_revenue,
            Self::OverallVisits => record.overall_visits,
        }
    }
}

impl std::fmt::Display for TopMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ranked customer, projected to the ranking metric and a few labels.
///
/// Serializes with the metric's column name as the key of `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct TopCustomer {
    /// Customer identifier.
    pub customer_id: Cell,
    /// Metric the ranking used.
    pub metric: TopMetric,
    /// The customer's value for `metric`.
    pub value: f64,
    /// Segment label.
    pub segment: String,
    /// Churn risk tier.
    pub churn_risk: String,
    /// Churn probability.
    pub churn_probability: f64,
}

impl Serialize for TopCustomer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("customer_id", &self.customer_id)?;
        map.serialize_entry(self.metric.as_str(), &self.value)?;
        map.serialize_entry("segment", &self.segment)?;
        map.serialize_entry("churn_risk", &self.churn_risk)?;
        map.serialize_entry("churn_probability", &self.churn_probability)?;
        map.end()
    }
}

impl QueryEngine {
    /// The `limit` customers with the highest `metric`, highest first.
    ///
    /// Ties keep table order. A non-positive `limit` returns nothing.
    #[must_use]
    pub fn top_customers(&self, metric: TopMetric, limit: i64) -> Vec<TopCustomer> {
        let limit = usize::try_from(limit).unwrap_or(0);

        let mut ranked: Vec<&CustomerRecord> = self.table().records().iter().collect();
        ranked.sort_by(|a, b| metric.value(b).total_cmp(&metric.value(a)));

        ranked
            .into_iter()
            .take(limit)
            .map(|record| TopCustomer {
                customer_id: record.customer_id.clone(),
                metric,
                value: metric.value(record),
                segment: record.segment.clone(),
                churn_risk: record.churn_risk.clone(),
                churn_probability: record.churn_probability,
            })
            .collect()
    }
}
