//! Churnscope HTTP API Service.
//!
//! This crate exposes the customer analytics queries of `churnscope-core` as
//! read-only JSON endpoints for the dashboard:
//!
//! - Filter options and headline summary
//! - Filtered customer listing and top-N rankings
//! - Segment and churn risk aggregates
//! - Product category revenue, engagement and contribution rollups
//!
//! The customer table is loaded once at startup and shared immutably by every
//! request; there is no write path and no authentication.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::unused_async)] // Query handlers are synchronous reads

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
