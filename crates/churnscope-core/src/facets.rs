//! Distinct filter values.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::record::CustomerRecord;
use crate::table::CategorySet;

/// Sorted, deduplicated values for every filterable dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Product category names.
    pub product_categories: Vec<String>,
    /// Distinct `segment` values.
    pub segments: Vec<String>,
    /// Distinct `churn_risk` values.
    pub churn_risks: Vec<String>,
    /// Distinct `cltv_segment` values.
    pub cltv_segments: Vec<String>,
}

impl Facets {
    /// Collect facets from loaded records.
    #[must_use]
    pub fn collect(records: &[CustomerRecord], categories: &CategorySet) -> Self {
        let distinct = |field: fn(&CustomerRecord) -> &str| -> Vec<String> {
            records
                .iter()
                .map(field)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_string)
                .collect()
        };

        Self {
            product_categories: categories.names(),
            segments: distinct(|r| r.segment.as_str()),
            churn_risks: distinct(|r| r.churn_risk.as_str()),
            cltv_segments: distinct(|r| r.cltv_segment.as_str()),
        }
    }
}
