//! Customer listing and ranking integration tests.

mod common;

use common::TestHarness;

fn ids(customers: &serde_json::Value) -> Vec<String> {
    customers
        .as_array()
        .expect("customers is an array")
        .iter()
        .map(|c| c["customer_id"].as_str().unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// List Customers
// ============================================================================

#[tokio::test]
async fn list_without_filters_returns_everyone() {
    let harness = TestHarness::new();

    let response = harness.server.get("/api/customers").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_count"], 6);
    assert_eq!(body["total_available"], 6);
    assert_eq!(body["customers"][0]["customer_id"], "C001");
    assert_eq!(body["customers"][0]["electronics_revenue"], 400.0);
    assert_eq!(body["customers"][0]["overall_visits"], 12);
}

#[tokio::test]
async fn list_filters_by_segment_and_limit() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/api/customers")
        .add_query_param("segment", "loyal")
        .add_query_param("limit", "2")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(ids(&body["customers"]), vec!["C001", "C003"]);
    assert_eq!(body["total_count"], 2);
    assert_eq!(body["total_available"], 3);
    for customer in body["customers"].as_array().unwrap() {
        assert_eq!(customer["segment"], "loyal");
    }
}

#[tokio::test]
async fn list_treats_all_as_no_filter() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/api/customers")
        .add_query_param("segment", "all")
        .add_query_param("churn_risk", "all")
        .add_query_param("category", "all")
        .await;

    let body: serde_json::Value = response.json();
    assert_eq!(body["total_available"], 6);
}

#[tokio::test]
async fn list_composes_filters() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/api/customers")
        .add_query_param("churn_risk", "high")
        .add_query_param("cltv_segment", "low")
        .add_query_param("category", "electronics")
        .await;

    let body: serde_json::Value = response.json();
    assert_eq!(ids(&body["customers"]), vec!["C004"]);
}

#[tokio::test]
async fn list_ignores_unknown_category() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/api/customers")
        .add_query_param("category", "garden")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_available"], 6);
}

#[tokio::test]
async fn list_with_unknown_value_is_empty_not_error() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/api/customers")
        .add_query_param("segment", "dormant")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_count"], 0);
    assert_eq!(body["total_available"], 0);
}

#[tokio::test]
async fn list_with_non_positive_limit_returns_no_rows() {
    let harness = TestHarness::new();

    for limit in ["0", "-4"] {
        let response = harness
            .server
            .get("/api/customers")
            .add_query_param("limit", limit)
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["total_count"], 0);
        assert_eq!(body["total_available"], 6);
    }
}

#[tokio::test]
async fn list_with_unparseable_limit_uses_default() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/api/customers")
        .add_query_param("limit", "lots")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_count"], 6);
}

#[tokio::test]
async fn list_with_repeated_parameter_uses_first_value() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/api/customers?segment=new&segment=loyal")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["total_count"], 2);
    let segments: Vec<_> = body["customers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["segment"].as_str().unwrap())
        .collect();
    assert_eq!(segments, vec!["new", "new"]);
}

// ============================================================================
// Top Customers
// ============================================================================

#[tokio::test]
async fn top_customers_default_to_cltv() {
    let harness = TestHarness::new();

    let response = harness.server.get("/api/top-customers").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["customer_id"], "C005");
    assert_eq!(rows[0]["cltv"], 1500.0);
}

#[tokio::test]
async fn top_customers_by_revenue_are_descending() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/api/top-customers")
        .add_query_param("metric", "overall_revenue")
        .add_query_param("limit", "3")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(ids(&body), vec!["C005", "C001", "C003"]);

    let values: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["overall_revenue"].as_f64().unwrap())
        .collect();
    assert!(values.windows(2).all(|pair| pair[0] >= pair[1]));

    let first = &body[0];
    assert_eq!(first["segment"], "loyal");
    assert_eq!(first["churn_risk"], "low");
    assert_eq!(first["churn_probability"], 0.15);
    assert!(first.get("cltv").is_none());
}

#[tokio::test]
async fn top_customers_unknown_metric_falls_back_to_cltv() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/api/top-customers")
        .add_query_param("metric", "churn_probability")
        .add_query_param("limit", "1")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body[0]["customer_id"], "C005");
    assert_eq!(body[0]["cltv"], 1500.0);
    assert!(body[0].get("churn_probability").is_some());
}
