//! The immutable customer table and its category discovery.

use std::collections::HashSet;
use std::sync::Arc;

use crate::cell::Cell;
use crate::error::{DataError, Result};
use crate::facets::Facets;
use crate::record::{CategoryMetrics, CustomerRecord, CustomerRow};

/// Columns every source table must carry.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "customer_id",
    "segment",
    "churn_risk",
    "churn_probability",
    "cltv",
    "cltv_segment",
    "overall_revenue",
    "overall_visits",
];

const VISITS_SUFFIX: &str = "_visits";
const OVERALL_VISITS: &str = "overall_visits";

/// A product category and the header positions of its four metric columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    visits: usize,
    revenue: usize,
    units: usize,
    recency: usize,
}

impl Category {
    /// The category name (the `_visits` column name without its suffix).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Product categories discovered from the table header, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    /// Discover categories from `<name>_visits` columns, excluding `overall_visits`.
    ///
    /// # Errors
    ///
    /// Returns `DataError::MissingCompanion` if a category lacks its
    /// `_revenue`, `_units` or `_recency` column.
    pub fn discover(headers: &[String]) -> Result<Self> {
        let position = |column: &str| headers.iter().position(|h| h == column);

        let mut categories = Vec::new();
        for (visits, header) in headers.iter().enumerate() {
            if header == OVERALL_VISITS {
                continue;
            }
            let Some(name) = header.strip_suffix(VISITS_SUFFIX) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }

            let companion = |suffix: &str| {
                let column = format!("{name}_{suffix}");
                position(&column).ok_or_else(|| DataError::MissingCompanion {
                    category: name.to_string(),
                    column,
                })
            };

            categories.push(Category {
                name: name.to_string(),
                visits,
                revenue: companion("revenue")?,
                units: companion("units")?,
                recency: companion("recency")?,
            });
        }

        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { categories })
    }

    /// Index of the named category, if it exists.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.categories
            .binary_search_by(|c| c.name.as_str().cmp(name))
            .ok()
    }

    /// Iterate over categories in name order.
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    /// Category names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether no category was discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<'a> IntoIterator for &'a CategorySet {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Header positions of the required columns.
#[derive(Debug, Clone, Copy)]
struct RequiredColumns {
    customer_id: usize,
    segment: usize,
    churn_risk: usize,
    churn_probability: usize,
    cltv: usize,
    cltv_segment: usize,
    overall_revenue: usize,
    overall_visits: usize,
}

impl RequiredColumns {
    fn resolve(headers: &[String]) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| DataError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            customer_id: find("customer_id")?,
            segment: find("segment")?,
            churn_risk: find("churn_risk")?,
            churn_probability: find("churn_probability")?,
            cltv: find("cltv")?,
            cltv_segment: find("cltv_segment")?,
            overall_revenue: find("overall_revenue")?,
            overall_visits: find("overall_visits")?,
        })
    }
}

/// Incrementally validates rows into a `Table`.
#[derive(Debug)]
pub struct TableBuilder {
    headers: Arc<[String]>,
    required: RequiredColumns,
    categories: CategorySet,
    records: Vec<CustomerRecord>,
}

impl TableBuilder {
    /// Validate the header and prepare to accept rows.
    ///
    /// # Errors
    ///
    /// Returns an error on a duplicate column, a missing required column or an
    /// incomplete category.
    pub fn new(headers: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(headers.len());
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(DataError::DuplicateColumn {
                    column: header.clone(),
                });
            }
        }

        let required = RequiredColumns::resolve(&headers)?;
        let categories = CategorySet::discover(&headers)?;

        Ok(Self {
            headers: headers.into(),
            required,
            categories,
            records: Vec::new(),
        })
    }

    /// Validate one data row and append it.
    ///
    /// # Errors
    ///
    /// Returns `DataError::FieldCount` if the row is ragged and
    /// `DataError::InvalidNumber` if a required numeric or category metric
    /// column is not a number.
    pub fn push_row<'r, I>(&mut self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = &'r str>,
    {
        let raw: Vec<&str> = fields.into_iter().collect();
        let row = self.records.len() + 1;
        if raw.len() != self.headers.len() {
            return Err(DataError::FieldCount {
                row,
                expected: self.headers.len(),
                found: raw.len(),
            });
        }

        let cells: Vec<Cell> = raw.iter().map(|field| Cell::parse(field)).collect();
        let number = |index: usize| {
            cells[index]
                .as_f64()
                .ok_or_else(|| DataError::InvalidNumber {
                    row,
                    column: self.headers[index].clone(),
                    value: raw[index].to_string(),
                })
        };
        let text = |index: usize| raw[index].trim().to_string();

        let required = self.required;
        let categories = self
            .categories
            .iter()
            .map(|category| -> Result<CategoryMetrics> {
                Ok(CategoryMetrics {
                    visits: number(category.visits)?,
                    revenue: number(category.revenue)?,
                    units: number(category.units)?,
                    recency: number(category.recency)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let churn_probability = number(required.churn_probability)?;
        let cltv = number(required.cltv)?;
        let overall_revenue = number(required.overall_revenue)?;
        let overall_visits = number(required.overall_visits)?;

        let record = CustomerRecord {
            customer_id: cells[required.customer_id].clone(),
            segment: text(required.segment),
            churn_risk: text(required.churn_risk),
            churn_probability,
            cltv,
            cltv_segment: text(required.cltv_segment),
            overall_revenue,
            overall_visits,
            categories,
            cells,
        };

        self.records.push(record);
        Ok(())
    }

    /// Number of rows accepted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no row has been accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Freeze the rows into a table and derive its facets.
    #[must_use]
    pub fn finish(self) -> Table {
        let facets = Facets::collect(&self.records, &self.categories);
        tracing::debug!(
            rows = self.records.len(),
            categories = self.categories.len(),
            "Customer table built"
        );
        Table {
            headers: self.headers,
            records: self.records,
            categories: self.categories,
            facets,
        }
    }
}

/// The customer table: loaded once, never mutated.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Arc<[String]>,
    records: Vec<CustomerRecord>,
    categories: CategorySet,
    facets: Facets,
}

impl Table {
    /// Start building a table with the given header.
    ///
    /// # Errors
    ///
    /// See [`TableBuilder::new`].
    pub fn builder(headers: Vec<String>) -> Result<TableBuilder> {
        TableBuilder::new(headers)
    }

    /// Column names in source order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All records in source order.
    #[must_use]
    pub fn records(&self) -> &[CustomerRecord] {
        &self.records
    }

    /// Number of customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no customers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discovered product categories.
    #[must_use]
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Distinct filter values.
    #[must_use]
    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    /// The full row of a record, ready to serialize.
    #[must_use]
    pub fn row(&self, record: &CustomerRecord) -> CustomerRow {
        CustomerRow::new(Arc::clone(&self.headers), record.cells.clone())
    }
}
