//! Aggregates grouped by segment and by churn risk.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{round2, Mean, QueryEngine};
use crate::record::CustomerRecord;

/// Per-segment aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentStat {
    /// Segment label.
    pub segment: String,
    /// Customers in the segment.
    pub count: usize,
    /// Sum of `overall_revenue`.
    pub total_revenue: f64,
    /// Mean `overall_visits`.
    pub avg_visits: f64,
    /// Mean churn probability, as a percentage.
    #[serde(rename = "avg_churn_probability")]
    pub avg_churn_probability_pct: f64,
    /// Mean CLTV.
    pub avg_cltv: f64,
}

/// Per-churn-tier aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChurnRiskStat {
    /// Churn risk tier.
    pub risk_level: String,
    /// Customers in the tier.
    pub customer_count: usize,
    /// Mean churn probability, as a percentage.
    #[serde(rename = "avg_probability")]
    pub avg_probability_pct: f64,
    /// Mean CLTV.
    pub avg_cltv: f64,
    /// Mean `overall_revenue`.
    pub avg_revenue: f64,
}

#[derive(Debug, Default)]
struct GroupTotals {
    revenue: Mean,
    visits: Mean,
    probability: Mean,
    cltv: Mean,
}

impl GroupTotals {
    fn add(&mut self, record: &CustomerRecord) {
        self.revenue.add(record.overall_revenue);
        self.visits.add(record.overall_visits);
        self.probability.add(record.churn_probability);
        self.cltv.add(record.cltv);
    }

    fn count(&self) -> usize {
        self.revenue.count()
    }
}

/// Group records by a text key, in ascending key order.
fn group_by<'a>(
    records: &'a [CustomerRecord],
    key: impl Fn(&'a CustomerRecord) -> &'a str,
) -> BTreeMap<&'a str, GroupTotals> {
    let mut groups: BTreeMap<&str, GroupTotals> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().add(record);
    }
    groups
}

impl QueryEngine {
    /// Aggregates per distinct segment, ordered by segment name.
    #[must_use]
    pub fn segment_stats(&self) -> Vec<SegmentStat> {
        group_by(self.table().records(), |r| r.segment.as_str())
            .into_iter()
            .map(|(segment, totals)| SegmentStat {
                segment: segment.to_string(),
                count: totals.count(),
                total_revenue: round2(totals.revenue.sum()),
                avg_visits: round2(totals.visits.value()),
                avg_churn_probability_pct: round2(totals.probability.value() * 100.0),
                avg_cltv: round2(totals.cltv.value()),
            })
            .collect()
    }

    /// Aggregates per distinct churn risk tier, ordered by tier name.
    #[must_use]
    pub fn churn_risk_stats(&self) -> Vec<ChurnRiskStat> {
        group_by(self.table().records(), |r| r.churn_risk.as_str())
            .into_iter()
            .map(|(risk_level, totals)| ChurnRiskStat {
                risk_level: risk_level.to_string(),
                customer_count: totals.count(),
                avg_probability_pct: round2(totals.probability.value() * 100.0),
                avg_cltv: round2(totals.cltv.value()),
                avg_revenue: round2(totals.revenue.value()),
            })
            .collect()
    }
}
