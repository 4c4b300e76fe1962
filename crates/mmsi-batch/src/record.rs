//! # Record Loading
//!
//! Reads comma-delimited input with a header row. Every field is kept as
//! text so identities with leading zeros survive. Rows may be ragged; a
//! short row simply has no value for the trailing columns.
//!
//! Header names are matched exactly as written, surrounding spaces included.
//! An input without the identity column is rejected before any row is read.

use std::io::Read;
use std::path::Path;

use crate::error::BatchError;

/// Name of the identity column when none is configured.
pub const DEFAULT_IDENTITY_COLUMN: &str = "mmsi";

/// Records loaded from a delimited source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    /// Header row, in file order.
    pub headers: Vec<String>,
    /// Data rows. Field order follows `headers`.
    pub rows: Vec<Vec<String>>,
    /// Index of the identity column within `headers`.
    pub identity_column: usize,
}

impl RecordSet {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The raw identity value of row `index`, if the row has that field.
    pub fn identity(&self, index: usize) -> Option<&str> {
        self.rows
            .get(index)?
            .get(self.identity_column)
            .map(String::as_str)
    }
}

/// Load records from the file at `path`.
///
/// Returns [`BatchError::InputNotFound`] when the file does not exist.
pub fn load_csv(path: &Path, identity_column: &str) -> Result<RecordSet, BatchError> {
    if !path.exists() {
        return Err(BatchError::InputNotFound {
            path: path.display().to_string(),
        });
    }
    let file = std::fs::File::open(path)?;
    read_records(file, identity_column).map_err(|err| match err {
        BatchError::Parse(source) => BatchError::Csv {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

/// Read records from any reader.
///
/// Returns [`BatchError::MissingColumn`] when no header equals `column`.
pub fn read_records<R: Read>(reader: R, column: &str) -> Result<RecordSet, BatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect();
    let Some(identity_column) = headers.iter().position(|h| h == column) else {
        return Err(BatchError::MissingColumn {
            column: column.to_string(),
            headers: headers.join(","),
        });
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "loaded records");

    Ok(RecordSet {
        headers,
        rows,
        identity_column,
    })
}
