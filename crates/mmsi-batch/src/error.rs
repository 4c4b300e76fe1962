//! # Batch Errors
//!
//! Failures at the I/O boundary of a batch run. These are fatal to the whole
//! run; per-identity problems are classification outcomes, not errors.

use thiserror::Error;

/// Error during a batch validation run.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The input file does not exist.
    #[error("input not found: {path}")]
    InputNotFound {
        /// The path that was looked up.
        path: String,
    },

    /// The delimited input could not be parsed.
    #[error("failed to read records from '{path}': {source}")]
    Csv {
        /// Path of the input being read.
        path: String,
        /// Underlying parser error.
        #[source]
        source: csv::Error,
    },

    /// A delimited source without a file path could not be parsed.
    #[error("failed to read records: {0}")]
    Parse(#[from] csv::Error),

    /// The header row has no identity column.
    #[error("identity column '{column}' not found in header: {headers}")]
    MissingColumn {
        /// Column name that was looked up.
        column: String,
        /// Header row as read, comma-joined.
        headers: String,
    },

    /// The spreadsheet report could not be built or saved.
    #[error("report error: {0}")]
    Report(#[from] rust_xlsxwriter::XlsxError),

    /// The report has more rows than a worksheet can hold.
    #[error("too many records for one worksheet: {rows} (limit {limit})")]
    TooManyRows {
        /// Rows that would be written, header included.
        rows: usize,
        /// Worksheet row limit.
        limit: usize,
    },

    /// The report has more columns than a worksheet can hold.
    #[error("too many columns for one worksheet: {columns} (limit {limit})")]
    TooManyColumns {
        /// Columns that would be written, result columns included.
        columns: usize,
        /// Worksheet column limit.
        limit: usize,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
