//! Table loading for churnscope.
//!
//! This crate reads the customer dataset from a delimited text file with a
//! header row and validates it into an immutable [`Table`]. Loading happens
//! once, at startup; every error it reports is fatal to the service.
//!
//! # Example
//!
//! ```no_run
//! use churnscope_store::{CsvSource, TableSource};
//!
//! let table = CsvSource::new("final_data.csv").load().unwrap();
//! println!("{} customers", table.len());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod csv_source;
pub mod error;

pub use csv_source::CsvSource;
pub use error::{Result, StoreError};

use churnscope_core::Table;

/// A source the customer table can be loaded from.
pub trait TableSource: Send + Sync {
    /// Read and validate the whole table.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or fails validation.
    fn load(&self) -> Result<Table>;
}
