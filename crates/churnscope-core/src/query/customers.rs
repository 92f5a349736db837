//! Filtered customer listing.

use serde::Serialize;

use super::QueryEngine;
use crate::filter::CustomerFilter;
use crate::record::CustomerRow;

/// Row limit used when the caller does not supply one.
pub const DEFAULT_CUSTOMER_LIMIT: i64 = 100;

/// A page of matching customers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerList {
    /// Matching customers, in table order, truncated to the limit.
    pub customers: Vec<CustomerRow>,
    /// Number of customers returned.
    pub total_count: usize,
    /// Number of customers matching before truncation.
    pub total_available: usize,
}

impl QueryEngine {
    /// List the first `limit` customers matching `filter`.
    ///
    /// A non-positive `limit` returns no rows but still reports
    /// `total_available`.
    #[must_use]
    pub fn list_customers(&self, filter: &CustomerFilter, limit: i64) -> CustomerList {
        let table = self.table();
        let limit = usize::try_from(limit).unwrap_or(0);

        let mut customers = Vec::new();
        let mut total_available = 0;
        for record in filter.apply(table) {
            if customers.len() < limit {
                customers.push(table.row(record));
            }
            total_available += 1;
        }

        tracing::debug!(
            ?filter,
            limit,
            total_available,
            returned = customers.len(),
            "Listed customers"
        );

        CustomerList {
            total_count: customers.len(),
            customers,
            total_available,
        }
    }
}
