//! Row filters shared by the customer list and contribution queries.

use crate::record::CustomerRecord;
use crate::table::Table;

/// Value meaning "do not filter on this dimension".
pub const ALL: &str = "all";

/// Optional exact-match filters, combined with logical AND.
///
/// A dimension is inactive when its value is absent, empty or `"all"`. Values
/// that no record carries are not rejected; they match nothing. An unknown
/// `category` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    /// Exact `segment` value.
    pub segment: Option<String>,
    /// Exact `churn_risk` value.
    pub churn_risk: Option<String>,
    /// Exact `cltv_segment` value.
    pub cltv_segment: Option<String>,
    /// Category the customer must have visited (`<category>_visits > 0`).
    pub category: Option<String>,
}

impl CustomerFilter {
    /// A filter that keeps every row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a segment.
    #[must_use]
    pub fn segment(mut self, value: impl Into<String>) -> Self {
        self.segment = Some(value.into());
        self
    }

    /// Restrict to a churn risk tier.
    #[must_use]
    pub fn churn_risk(mut self, value: impl Into<String>) -> Self {
        self.churn_risk = Some(value.into());
        self
    }

    /// Restrict to a CLTV tier.
    #[must_use]
    pub fn cltv_segment(mut self, value: impl Into<String>) -> Self {
        self.cltv_segment = Some(value.into());
        self
    }

    /// Restrict to customers who visited a category.
    #[must_use]
    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    /// The same filter with the category dimension cleared.
    #[must_use]
    pub fn without_category(&self) -> Self {
        Self {
            category: None,
            ..self.clone()
        }
    }

    /// Iterate over the matching records of `table`, in table order.
    pub fn apply<'a>(&'a self, table: &'a Table) -> impl Iterator<Item = &'a CustomerRecord> + 'a {
        let category = active(self.category.as_ref())
            .and_then(|name| table.categories().position(name));

        table
            .records()
            .iter()
            .filter(move |record| self.matches(record, category))
    }

    fn matches(&self, record: &CustomerRecord, category: Option<usize>) -> bool {
        let exact = |wanted: Option<&String>, actual: &str| {
            active(wanted).map_or(true, |wanted| wanted == actual)
        };

        exact(self.segment.as_ref(), &record.segment)
            && exact(self.churn_risk.as_ref(), &record.churn_risk)
            && exact(self.cltv_segment.as_ref(), &record.cltv_segment)
            && category.map_or(true, |index| {
                record.category(index).is_some_and(|m| m.visits > 0.0)
            })
    }
}

fn active(value: Option<&String>) -> Option<&str> {
    value
        .map(String::as_str)
        .filter(|v| !v.is_empty() && *v != ALL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;

    fn ids(filter: &CustomerFilter, table: &Table) -> Vec<String> {
        filter
            .apply(table)
            .map(|r| r.customer_id.to_string())
            .collect()
    }

    #[test]
    fn empty_filter_keeps_every_row() {
        let table = fixture::table();
        assert_eq!(CustomerFilter::new().apply(&table).count(), 6);
    }

    #[test]
    fn all_and_empty_values_are_inactive() {
        let table = fixture::table();
        let filter = CustomerFilter::new()
            .segment("all")
            .churn_risk("")
            .category(ALL);
        assert_eq!(filter.apply(&table).count(), 6);
    }

    #[test]
    fn dimensions_compose_with_and() {
        let table = fixture::table();
        let filter = CustomerFilter::new().churn_risk("high").cltv_segment("low");
        assert_eq!(ids(&filter, &table), vec!["C002", "C004"]);

        let filter = CustomerFilter::new().segment("loyal").churn_risk("low");
        assert_eq!(ids(&filter, &table), vec!["C001", "C005"]);
    }

    #[test]
    fn unknown_value_matches_nothing() {
        let table = fixture::table();
        let filter = CustomerFilter::new().segment("dormant");
        assert_eq!(filter.apply(&table).count(), 0);
    }

    #[test]
    fn category_keeps_visitors_only() {
        let table = fixture::table();
        let filter = CustomerFilter::new().category("toys");
        assert_eq!(ids(&filter, &table), vec!["C006"]);
    }

    #[test]
    fn unknown_category_is_ignored() {
        let table = fixture::table();
        let filter = CustomerFilter::new().category("garden").segment("new");
        assert_eq!(ids(&filter, &table), vec!["C004", "C006"]);
    }
}
