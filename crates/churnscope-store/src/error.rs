//! Error types for table loading.

use std::path::PathBuf;

use churnscope_core::DataError;

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while loading the table.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The source file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        /// The file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not well-formed delimited text.
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    /// The rows do not form a valid customer table.
    #[error("invalid table: {0}")]
    Data(#[from] DataError),
}
