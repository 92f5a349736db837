//! Churnscope Service - HTTP API for customer behavior analytics
//!
//! This is the main entry point for the churnscope service.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use churnscope_service::{create_router, AppState, ServiceConfig};
use churnscope_store::{CsvSource, TableSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,churnscope=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Churnscope Service");

    // Load configuration from environment
    let config = ServiceConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        data_path = %config.data_path.display(),
        cors_origins = ?config.cors_origins,
        "Service configuration loaded"
    );

    // Load the customer table; any failure here stops startup
    let table = CsvSource::new(&config.data_path)
        .with_delimiter(config.csv_delimiter)
        .load()?;

    // Build app state
    let state = AppState::new(table, config.clone());

    // Create the router
    let app = create_router(state);
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
