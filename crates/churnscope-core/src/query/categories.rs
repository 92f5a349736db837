//! Product category rollups.

use serde::Serialize;

use super::{percentage, ratio, round2, round_to, total, whole, Mean, QueryEngine};
use crate::filter::CustomerFilter;

/// Message carried by the placeholder returned for an empty group.
pub const SELECT_GROUP_MESSAGE: &str = "Please select a product group to view metrics";

/// Error carried by the payload returned for an unknown group.
pub const INVALID_GROUP: &str = "Invalid product group";

/// Revenue rollup for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRevenue {
    /// Category name.
    pub category: String,
    /// Sum of `<category>_revenue`.
    pub total_revenue: f64,
    /// Mean revenue over customers with revenue in the category.
    pub avg_revenue: f64,
    /// Customers with revenue in the category.
    pub customer_count: usize,
}

/// Engagement metrics for the customers who visited one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMetrics {
    /// The requested group.
    pub group: String,
    /// Informational note, only present on the placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Sum of visits.
    pub total_visits: i64,
    /// Sum of revenue.
    pub total_revenue: f64,
    /// Sum of units.
    pub total_units: i64,
    /// Mean recency, one decimal.
    pub avg_recency: f64,
    /// Sum of CLTV.
    pub total_cltv: f64,
    /// Mean CLTV.
    pub avg_cltv: f64,
    /// Visitors in the `high` CLTV tier.
    pub high_cltv_count: usize,
    /// Visitors in the `medium` CLTV tier.
    pub medium_cltv_count: usize,
    /// Visitors in the `low` CLTV tier.
    pub low_cltv_count: usize,
    /// Number of visitors.
    pub customer_count: usize,
}

impl GroupMetrics {
    /// The zero-valued payload shown before a group is selected.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            group: String::new(),
            message: Some(SELECT_GROUP_MESSAGE.to_string()),
            total_visits: 0,
            total_revenue: 0.0,
            total_units: 0,
            avg_recency: 0.0,
            total_cltv: 0.0,
            avg_cltv: 0.0,
            high_cltv_count: 0,
            medium_cltv_count: 0,
            low_cltv_count: 0,
            customer_count: 0,
        }
    }
}

/// Outcome of a product group lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProductGroupReport {
    /// Metrics for a known group, or the placeholder for an empty one.
    Metrics(GroupMetrics),
    /// The group does not name a category.
    Invalid {
        /// The requested group.
        group: String,
        /// Always [`INVALID_GROUP`].
        error: String,
    },
}

/// One category's share of the filtered customers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    /// Category name.
    pub category: String,
    /// Sum of category revenue.
    pub revenue: f64,
    /// Category revenue as a percentage of total `overall_revenue`.
    pub revenue_percentage: f64,
    /// Customers who visited the category.
    pub customers: usize,
    /// Visitors as a percentage of all filtered customers.
    pub customer_percentage: f64,
    /// Sum of category visits.
    pub visits: i64,
    /// Sum of category units.
    pub units: i64,
    /// Category revenue per visitor.
    pub avg_revenue_per_customer: f64,
}

/// The filter values echoed back with contributions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppliedFilters {
    /// Requested segment.
    pub segment: Option<String>,
    /// Requested churn risk tier.
    pub churn_risk: Option<String>,
    /// Requested CLTV tier.
    pub cltv_segment: Option<String>,
}

/// Per-category contributions for a filtered set of customers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandContributions {
    /// Contributions, highest revenue share first.
    pub contributions: Vec<Contribution>,
    /// Sum of `overall_revenue` over the filtered customers.
    pub total_revenue: f64,
    /// Number of filtered customers.
    pub total_customers: usize,
    /// The filters as requested.
    pub filters_applied: AppliedFilters,
}

impl QueryEngine {
    /// Revenue per category, highest total first.
    #[must_use]
    pub fn category_revenue(&self) -> Vec<CategoryRevenue> {
        let records = self.table().records();

        let mut rows: Vec<CategoryRevenue> = self
            .table()
            .categories()
            .iter()
            .enumerate()
            .map(|(index, category)| {
                let revenues = records.iter().map(|r| r.categories[index].revenue);
                let revenue = total(revenues.clone());
                let buyers: Mean = revenues.filter(|revenue| *revenue > 0.0).collect();

                CategoryRevenue {
                    category: category.name().to_string(),
                    total_revenue: round2(revenue),
                    avg_revenue: round2(buyers.value()),
                    customer_count: buyers.count(),
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            b.total_revenue
                .total_cmp(&a.total_revenue)
                .then_with(|| a.category.cmp(&b.category))
        });
        rows
    }

    /// Engagement metrics for the customers who visited `group`.
    ///
    /// An empty `group` yields the placeholder; an unknown one yields
    /// [`ProductGroupReport::Invalid`].
    #[must_use]
    pub fn product_group_metrics(&self, group: &str) -> ProductGroupReport {
        if group.is_empty() {
            return ProductGroupReport::Metrics(GroupMetrics::placeholder());
        }

        let table = self.table();
        let Some(index) = table.categories().position(group) else {
            tracing::debug!(group, "Unknown product group requested");
            return ProductGroupReport::Invalid {
                group: group.to_string(),
                error: INVALID_GROUP.to_string(),
            };
        };

        let mut visits = 0.0;
        let mut revenue = 0.0;
        let mut units = 0.0;
        let mut recency = Mean::default();
        let mut cltv = Mean::default();
        let (mut high, mut medium, mut low) = (0, 0, 0);

        for record in table.records() {
            let metrics = &record.categories[index];
            if metrics.visits <= 0.0 {
                continue;
            }
            visits += metrics.visits;
            revenue += metrics.revenue;
            units += metrics.units;
            recency.add(metrics.recency);
            cltv.add(record.cltv);
            match record.cltv_segment.as_str() {
                "high" => high += 1,
                "medium" => medium += 1,
                "low" => low += 1,
                _ => {}
            }
        }

        ProductGroupReport::Metrics(GroupMetrics {
            group: group.to_string(),
            message: None,
            total_visits: whole(visits),
            total_revenue: round2(revenue),
            total_units: whole(units),
            avg_recency: round_to(recency.value(), 1),
            total_cltv: round2(cltv.sum()),
            avg_cltv: round2(cltv.value()),
            high_cltv_count: high,
            medium_cltv_count: medium,
            low_cltv_count: low,
            customer_count: cltv.count(),
        })
    }

    /// Each category's share of revenue and customers within the filtered set.
    ///
    /// The filter's `category` dimension is ignored.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn brand_contributions(&self, filter: &CustomerFilter) -> BrandContributions {
        let table = self.table();
        let filter = filter.without_category();
        let rows: Vec<_> = filter.apply(table).collect();

        let total_revenue = total(rows.iter().map(|r| r.overall_revenue));
        let total_customers = rows.len();

        let mut contributions: Vec<Contribution> = table
            .categories()
            .iter()
            .enumerate()
            .map(|(index, category)| {
                let mut revenue = 0.0;
                let mut visits = 0.0;
                let mut units = 0.0;
                let mut customers = 0usize;
                for record in &rows {
                    let metrics = &record.categories[index];
                    revenue += metrics.revenue;
                    visits += metrics.visits;
                    units += metrics.units;
                    if metrics.visits > 0.0 {
                        customers += 1;
                    }
                }

                Contribution {
                    category: category.name().to_string(),
                    revenue: round2(revenue),
                    revenue_percentage: round2(percentage(revenue, total_revenue)),
                    customers,
                    customer_percentage: round2(percentage(
                        customers as f64,
                        total_customers as f64,
                    )),
                    visits: whole(visits),
                    units: whole(units),
                    avg_revenue_per_customer: round2(ratio(revenue, customers as f64)),
                }
            })
            .collect();

        contributions.sort_by(|a, b| {
            b.revenue_percentage
                .total_cmp(&a.revenue_percentage)
                .then_with(|| a.category.cmp(&b.category))
        });

        BrandContributions {
            contributions,
            total_revenue: round2(total_revenue),
            total_customers,
            filters_applied: AppliedFilters {
                segment: filter.segment,
                churn_risk: filter.churn_risk,
                cltv_segment: filter.cltv_segment,
            },
        }
    }
}
