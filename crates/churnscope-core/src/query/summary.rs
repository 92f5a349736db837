//! Whole-table summary.

use serde::Serialize;

use super::{round2, total, Mean, QueryEngine};

/// Churn tier counted as high risk.
const HIGH_RISK: &str = "high";

/// Headline numbers for the whole table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of customers.
    pub total_customers: usize,
    /// Mean churn probability, as a percentage.
    #[serde(rename = "avg_churn_rate")]
    pub avg_churn_rate_pct: f64,
    /// Customers whose churn risk is `high`.
    pub high_risk_customers: usize,
    /// Sum of `overall_revenue`.
    pub total_revenue: f64,
    /// Mean CLTV.
    pub avg_cltv: f64,
}

impl QueryEngine {
    /// Summarize the whole table. Takes no filters.
    #[must_use]
    pub fn summary(&self) -> Summary {
        let records = self.table().records();

        let churn: Mean = records.iter().map(|r| r.churn_probability).collect();
        let cltv: Mean = records.iter().map(|r| r.cltv).collect();
        let total_revenue = total(records.iter().map(|r| r.overall_revenue));
        let high_risk_customers = records
            .iter()
            .filter(|r| r.churn_risk == HIGH_RISK)
            .count();

        Summary {
            total_customers: records.len(),
            avg_churn_rate_pct: round2(churn.value() * 100.0),
            high_risk_customers,
            total_revenue: round2(total_revenue),
            avg_cltv: round2(cltv.value()),
        }
    }
}
