//! Common test utilities for churnscope integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::io::Write;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use churnscope_service::{create_router, AppState, ServiceConfig};
use churnscope_store::{CsvSource, TableSource};

/// Customer dataset shared by the integration tests.
pub const FIXTURE_CSV: &str = "\
customer_id,overall_visits,overall_revenue,overall_units,churn_probability,churn_risk,segment,cltv,cltv_segment,electronics_visits,electronics_revenue,electronics_units,electronics_recency,home_decor_visits,home_decor_revenue,home_decor_units,home_decor_recency,toys_visits,toys_revenue,toys_units,toys_recency
C001,12,540.50,20,0.10,low,loyal,1200.00,high,8,400.00,10,5,4,140.50,10,12,0,0,0,0
C002,3,80.00,4,0.85,high,at_risk,150.00,low,0,0,0,0,3,80.00,4,40,0,0,0,0
C003,7,310.25,9,0.40,medium,loyal,640.00,medium,5,250.25,6,8,2,60.00,3,20,0,0,0,0
C004,1,25.00,1,0.92,high,new,60.00,low,1,25.00,1,30,0,0,0,0,0,0,0,0
C005,9,720.00,15,0.15,low,loyal,1500.00,high,6,500.00,8,3,3,220.00,7,9,0,0,0,0
C006,4,95.75,5,0.55,medium,new,210.00,medium,0,0,0,0,4,95.75,5,15,2,0,0,60
";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Temporary directory for the dataset (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a harness serving the fixture dataset.
    pub fn new() -> Self {
        Self::with_csv(FIXTURE_CSV)
    }

    /// Create a harness serving the given CSV contents.
    pub fn with_csv(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_path = temp_dir.path().join("final_data.csv");
        let mut file = std::fs::File::create(&data_path).expect("Failed to create dataset");
        file.write_all(contents.as_bytes())
            .expect("Failed to write dataset");

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            data_path,
            ..ServiceConfig::default()
        };

        let table = CsvSource::new(&config.data_path)
            .with_delimiter(config.csv_delimiter)
            .load()
            .expect("Failed to load dataset");

        let state = AppState::new(table, config);
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            _temp_dir: temp_dir,
        }
    }

    /// Create a harness whose dataset has a header but no customers.
    pub fn empty() -> Self {
        let header = FIXTURE_CSV.lines().next().expect("fixture has a header");
        Self::with_csv(&format!("{header}\n"))
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
