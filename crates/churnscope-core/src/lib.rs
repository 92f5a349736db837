//! Core types and query engine for churnscope.
//!
//! This crate holds the in-memory customer table and every read-only query the
//! analytics API answers over it:
//!
//! - **Model**: `Cell`, `CustomerRecord`, `CategoryMetrics`, `Table`
//! - **Categories**: `Category`, `CategorySet` (discovered from `<name>_visits` columns)
//! - **Facets**: `Facets` (sorted distinct values used to populate filter UIs)
//! - **Queries**: `QueryEngine` and its result types
//!
//! # Empty aggregates
//!
//! Every mean, ratio and percentage computed over a possibly-empty set of rows
//! evaluates to `0` instead of `NaN`, so results always serialize as finite
//! JSON numbers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cell;
pub mod error;
pub mod facets;
pub mod filter;
pub mod query;
pub mod record;
pub mod table;

#[cfg(test)]
pub(crate) mod fixture;

pub use cell::Cell;
pub use error::{DataError, Result};
pub use facets::Facets;
pub use filter::CustomerFilter;
pub use query::{
    AppliedFilters, BrandContributions, CategoryRevenue, ChurnRiskStat, Contribution,
    CustomerList, GroupMetrics, ProductGroupReport, QueryEngine, SegmentStat, Summary,
    TopCustomer, TopMetric,
};
pub use record::{CategoryMetrics, CustomerRecord, CustomerRow};
pub use table::{Category, CategorySet, Table, TableBuilder, REQUIRED_COLUMNS};
