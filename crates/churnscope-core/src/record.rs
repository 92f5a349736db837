//! Customer records.

use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::cell::Cell;

/// The four per-category metrics of one customer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryMetrics {
    /// `<category>_visits`.
    pub visits: f64,
    /// `<category>_revenue`.
    pub revenue: f64,
    /// `<category>_units`.
    pub units: f64,
    /// `<category>_recency`.
    pub recency: f64,
}

/// One customer: the raw row plus the typed fields the queries read.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    /// Opaque customer identifier, kept as it appeared in the source.
    pub customer_id: Cell,
    /// Behavioral segment label.
    pub segment: String,
    /// Churn risk tier (e.g. `low`, `medium`, `high`).
    pub churn_risk: String,
    /// Predicted churn probability in `[0, 1]`.
    pub churn_probability: f64,
    /// Customer lifetime value.
    pub cltv: f64,
    /// CLTV tier (e.g. `low`, `medium`, `high`).
    pub cltv_segment: String,
    /// Revenue across all categories.
    pub overall_revenue: f64,
    /// Visits across all categories.
    pub overall_visits: f64,
    /// Per-category metrics, indexed like the table's `CategorySet`.
    pub categories: Vec<CategoryMetrics>,
    /// Every source cell, in header order.
    pub cells: Vec<Cell>,
}

impl CustomerRecord {
    /// Metrics for the category at `index` in the table's `CategorySet`.
    #[must_use]
    pub fn category(&self, index: usize) -> Option<&CategoryMetrics> {
        self.categories.get(index)
    }
}

/// A full customer row ready for serialization as a `{column: value}` object.
///
/// Columns are emitted in source header order.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRow {
    headers: Arc<[String]>,
    cells: Vec<Cell>,
}

impl CustomerRow {
    pub(crate) fn new(headers: Arc<[String]>, cells: Vec<Cell>) -> Self {
        Self { headers, cells }
    }

    /// Look up a cell by column name.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|i| self.cells.get(i))
    }
}

impl Serialize for CustomerRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (header, cell) in self.headers.iter().zip(&self.cells) {
            map.serialize_entry(header, cell)?;
        }
        map.end()
    }
}
