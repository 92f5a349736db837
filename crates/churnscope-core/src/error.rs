//! Error types for building the customer table.

/// Result type for table construction.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors raised while validating a source table.
///
/// All of these are startup errors: once a `Table` exists, no query can fail.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A column the queries depend on is absent from the header.
    #[error("missing required column: {column}")]
    MissingColumn {
        /// The column name.
        column: String,
    },

    /// The same column name appears twice in the header.
    #[error("duplicate column: {column}")]
    DuplicateColumn {
        /// The column name.
        column: String,
    },

    /// A category was discovered from its `_visits` column but a companion column is absent.
    #[error("category {category} is missing companion column {column}")]
    MissingCompanion {
        /// The category name.
        category: String,
        /// The absent column.
        column: String,
    },

    /// A numeric column holds an empty or non-numeric value.
    #[error("row {row}: column {column} is not numeric: {value:?}")]
    InvalidNumber {
        /// 1-based data row number.
        row: usize,
        /// The column name.
        column: String,
        /// The offending raw value.
        value: String,
    },

    /// A row's field count differs from the header's.
    #[error("row {row}: expected {expected} fields, found {found}")]
    FieldCount {
        /// 1-based data row number.
        row: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of fields in the row.
        found: usize,
    },
}
