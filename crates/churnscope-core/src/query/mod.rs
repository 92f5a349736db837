//! The query engine.
//!
//! Every operation is a pure read over the shared table: a single filtering
//! pass followed by a reduction. Results are plain serializable values.

mod categories;
mod customers;
mod groups;
mod summary;
mod top;

use std::sync::Arc;

use crate::facets::Facets;
use crate::table::Table;

pub use categories::{
    AppliedFilters, BrandContributions, CategoryRevenue, Contribution, GroupMetrics,
    ProductGroupReport, INVALID_GROUP, SELECT_GROUP_MESSAGE,
};
pub use customers::{CustomerList, DEFAULT_CUSTOMER_LIMIT};
pub use groups::{ChurnRiskStat, SegmentStat};
pub use summary::Summary;
pub use top::{TopCustomer, TopMetric, DEFAULT_TOP_LIMIT};

/// Read-only handle answering analytics queries over one loaded table.
///
/// Cloning is cheap; all clones share the same table.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    table: Arc<Table>,
}

impl QueryEngine {
    /// Wrap a loaded table.
    #[must_use]
    pub fn new(table: Table) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// The underlying table.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Distinct values for populating filter controls.
    #[must_use]
    pub fn filters(&self) -> &Facets {
        self.table.facets()
    }
}

impl From<Table> for QueryEngine {
    fn from(table: Table) -> Self {
        Self::new(table)
    }
}

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

pub(crate) fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// `numerator / denominator`, or `0` when the denominator is zero.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Percentage of `part` in `whole`, `0` for an empty whole.
pub(crate) fn percentage(part: f64, whole: f64) -> f64 {
    ratio(part, whole) * 100.0
}

/// Sum of `values`, starting from positive zero.
pub(crate) fn total(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(0.0, |acc, value| acc + value)
}

/// Truncate a sum of whole-number metrics to an integer.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn whole(value: f64) -> i64 {
    value as i64
}

/// Running mean that reports `0` when nothing was added.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    pub(crate) fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub(crate) fn sum(&self) -> f64 {
        self.sum
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn value(&self) -> f64 {
        ratio(self.sum, self.count as f64)
    }
}

impl FromIterator<f64> for Mean {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut mean = Self::default();
        for value in iter {
            mean.add(value);
        }
        mean
    }
}

#[cfg(test)]
pub(crate) fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert!(approx(round2(626.666_666), 626.67));
        assert!(approx(round2(293.8125), 293.81));
        assert!(approx(round_to(11.549, 1), 11.5));
        assert!(approx(round2(-1.005_1), -1.01));
    }

    #[test]
    fn zero_denominator_yields_zero() {
        assert_eq!(ratio(5.0, 0.0), 0.0);
        assert_eq!(percentage(5.0, 0.0), 0.0);
        assert!(approx(percentage(1.0, 4.0), 25.0));
    }

    #[test]
    fn empty_mean_is_zero() {
        let mean = Mean::default();
        assert_eq!(mean.value(), 0.0);
        assert_eq!(mean.count(), 0);

        let mean: Mean = [2.0, 4.0, 9.0].into_iter().collect();
        assert!(approx(mean.value(), 5.0));
        assert!(approx(mean.sum(), 15.0));
    }

    #[test]
    fn empty_total_is_positive_zero() {
        let sum = total(std::iter::empty());
        assert_eq!(sum, 0.0);
        assert!(sum.is_sign_positive());
    }

    #[test]
    fn whole_truncates() {
        assert_eq!(whole(20.0), 20);
        assert_eq!(whole(7.9), 7);
    }
}
