//! Delimited-file table source.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use churnscope_core::Table;

use crate::error::{Result, StoreError};
use crate::TableSource;

/// Reads the table from a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvSource {
    /// A comma-delimited source at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Use a different single-byte field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// The file this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load a table from any reader using this source's settings.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Csv` for malformed input (including ragged rows)
    /// and `StoreError::Data` when the rows fail validation.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .double_quote(true)
            .flexible(false)
            .from_reader(reader);

        let headers = reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let mut builder = Table::builder(headers)?;

        for record in reader.records() {
            let record = record?;
            builder.push_row(record.iter())?;
        }

        Ok(builder.finish())
    }
}

impl TableSource for CsvSource {
    fn load(&self) -> Result<Table> {
        let file = File::open(&self.path).map_err(|source| StoreError::Open {
            path: self.path.clone(),
            source,
        })?;

        let table = self.load_from_reader(BufReader::new(file))?;
        tracing::info!(
            path = %self.path.display(),
            rows = table.len(),
            columns = table.headers().len(),
            categories = ?table.categories().names(),
            "Loaded customer table"
        );
        Ok(table)
    }
}
