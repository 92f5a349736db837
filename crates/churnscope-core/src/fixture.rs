//! Shared test table.

use crate::table::{Table, TableBuilder};

pub(crate) const HEADERS: [&str; 21] = [
    "customer_id",
    "overall_visits",
    "overall_revenue",
    "overall_units",
    "churn_probability",
    "churn_risk",
    "segment",
    "cltv",
    "cltv_segment",
    "electronics_visits",
    "electronics_revenue",
    "electronics_units",
    "electronics_recency",
    "home_decor_visits",
    "home_decor_revenue",
    "home_decor_units",
    "home_decor_recency",
    "toys_visits",
    "toys_revenue",
    "toys_units",
    "toys_recency",
];

#[rustfmt::skip]
pub(crate) const ROWS: [[&str; 21]; 6] = [
    ["C001", "12", "540.50", "20", "0.10", "low",    "loyal",   "1200.00", "high",   "8", "400.00", "10", "5",  "4", "140.50", "10", "12", "0", "0", "0", "0"],
    ["C002", "3",  "80.00",  "4",  "0.85", "high",   "at_risk", "150.00",  "low",    "0", "0",      "0",  "0",  "3", "80.00",  "4",  "40", "0", "0", "0", "0"],
    ["C003", "7",  "310.25", "9",  "0.40", "medium", "loyal",   "640.00",  "medium", "5", "250.25", "6",  "8",  "2", "60.00",  "3",  "20", "0", "0", "0", "0"],
    ["C004", "1",  "25.00",  "1",  "0.92", "high",   "new",     "60.00",   "low",    "1", "25.00",  "1",  "30", "0", "0",      "0",  "0",  "0", "0", "0", "0"],
    ["C005", "9",  "720.00", "15", "0.15", "low",    "loyal",   "1500.00", "high",   "6", "500.00", "8",  "3",  "3", "220.00", "7",  "9",  "0", "0", "0", "0"],
    ["C006", "4",  "95.75",  "5",  "0.55", "medium", "new",     "210.00",  "medium", "0", "0",      "0",  "0",  "4", "95.75",  "5",  "15", "2", "0", "0", "60"],
];

pub(crate) fn table() -> Table {
    let mut builder =
        TableBuilder::new(HEADERS.iter().map(|h| (*h).to_string()).collect()).unwrap();
    for row in &ROWS {
        builder.push_row(row.iter().copied()).unwrap();
    }
    builder.finish()
}

pub(crate) fn empty_table() -> Table {
    TableBuilder::new(HEADERS.iter().map(|h| (*h).to_string()).collect())
        .unwrap()
        .finish()
}
