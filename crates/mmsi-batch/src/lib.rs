//! # mmsi-batch — Batch MMSI Validation
//!
//! Thin runner around [`mmsi_core::classify`]: loads records from a
//! comma-delimited file, classifies the identity column of every row, and
//! writes the augmented records to a spreadsheet with invalid rows
//! highlighted.
//!
//! ## Pipeline
//!
//! 1. [`record::load_csv`] — read headers and rows as text.
//! 2. [`runner::run`] — classify in parallel, keep input order, count.
//! 3. [`report::write_report`] — one worksheet, invalid rows filled.
//!
//! ## Crate Policy
//!
//! - No classification logic here. Every decision comes from `mmsi-core`.
//! - I/O failures and a missing identity column are [`BatchError`]s and
//!   abort the run.

pub mod error;
pub mod record;
pub mod report;
pub mod runner;

use std::path::Path;

pub use error::BatchError;
pub use record::{load_csv, read_records, RecordSet, DEFAULT_IDENTITY_COLUMN};
pub use report::{
    report_bytes, write_report, DEFAULT_SHEET_NAME, INVALID_FILL, MAX_CELL_CHARS,
};
pub use runner::{run, AnnotatedRecord, BatchOutcome, BatchSummary, OUTPUT_COLUMNS};

/// Settings for [`analyze`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Header name of the identity column.
    pub identity_column: String,
    /// Worksheet name of the report.
    pub sheet_name: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            identity_column: DEFAULT_IDENTITY_COLUMN.to_string(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

/// Load `input`, classify every record, and write the report to `output`.
pub fn analyze(
    input: &Path,
    output: &Path,
    options: &BatchOptions,
) -> Result<BatchOutcome, BatchError> {
    tracing::debug!(
        input = %input.display(),
        column = %options.identity_column,
        "loading records"
    );
    let records = load_csv(input, &options.identity_column)?;
    let outcome = run(records);
    write_report(&outcome, output, &options.sheet_name)?;
    Ok(outcome)
}
