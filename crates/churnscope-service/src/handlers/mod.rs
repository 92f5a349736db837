//! API handlers.

pub mod categories;
pub mod customers;
pub mod health;
pub mod overview;
pub mod segments;

use std::collections::HashMap;

use axum::extract::Query;

/// Raw query string parameters.
///
/// A name given more than once keeps its first value.
#[derive(Debug, Default)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    /// Collect parameters from decoded `(name, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = HashMap::new();
        for (name, value) in pairs {
            params.entry(name).or_insert(value);
        }
        Self(params)
    }

    /// Remove and return the value of `name`.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }
}

impl From<Query<Vec<(String, String)>>> for QueryParams {
    fn from(Query(pairs): Query<Vec<(String, String)>>) -> Self {
        Self::from_pairs(pairs)
    }
}

/// Parse an integer query parameter, falling back to `default` when it is
/// absent or not an integer.
pub(crate) fn int_param(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
