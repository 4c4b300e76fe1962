//! # Validate Subcommand
//!
//! Batch validation of a detection file into a highlighted report:
//!
//! ```bash
//! mmsi validate --input sar_vessel_detections_pipev3_20250922.csv \
//!     --output sar_vessel_detections_mmsi_validation.xlsx
//! ```
//!
//! Prints the record total, the invalid count, the per-category breakdown,
//! and a preview of the first invalid identities with their notes.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mmsi_batch::{
    analyze, BatchOptions, BatchOutcome, DEFAULT_IDENTITY_COLUMN, DEFAULT_SHEET_NAME,
};

use crate::config::CliConfig;

/// Input file used when neither flag nor config names one.
pub const DEFAULT_INPUT: &str = "sar_vessel_detections_pipev3_20250922.csv";

/// Report file used when neither flag nor config names one.
pub const DEFAULT_OUTPUT: &str = "sar_vessel_detections_mmsi_validation.xlsx";

/// Number of invalid identities previewed by default.
pub const DEFAULT_PREVIEW: usize = 5;

/// Arguments for the validate subcommand.
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Path to the source CSV file.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Path of the Excel report to write.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Header of the column holding the MMSI.
    #[arg(long)]
    pub column: Option<String>,

    /// Number of invalid identities to preview.
    #[arg(long)]
    pub preview: Option<usize>,

    /// Worksheet name of the report.
    #[arg(long)]
    pub sheet_name: Option<String>,
}

/// Effective settings after merging flags, config, and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub preview: usize,
    pub options: BatchOptions,
}

impl ValidateSettings {
    pub fn resolve(args: &ValidateArgs, config: &CliConfig) -> Self {
        Self {
            input: args
                .input
                .clone()
                .or_else(|| config.input.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: args
                .output
                .clone()
                .or_else(|| config.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            preview: args.preview.or(config.preview).unwrap_or(DEFAULT_PREVIEW),
            options: BatchOptions {
                identity_column: args
                    .column
                    .clone()
                    .or_else(|| config.column.clone())
                    .unwrap_or_else(|| DEFAULT_IDENTITY_COLUMN.to_string()),
                sheet_name: args
                    .sheet_name
                    .clone()
                    .or_else(|| config.sheet_name.clone())
                    .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
            },
        }
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let settings = ValidateSettings::resolve(args, config);
    tracing::info!(
        input = %settings.input.display(),
        output = %settings.output.display(),
        "validating MMSI records"
    );

    let outcome = analyze(&settings.input, &settings.output, &settings.options)
        .with_context(|| format!("validation of {} failed", settings.input.display()))?;

    print!("{}", render_summary(&outcome, settings.preview));
    tracing::info!(report = %settings.output.display(), "report written");
    Ok(0)
}

/// Console summary: totals, category counts, then a preview of invalid
/// identities.
pub fn render_summary(outcome: &BatchOutcome, preview: usize) -> String {
    let mut out = String::new();
    let summary = &outcome.summary;
    let _ = writeln!(out, "Total records: {}", summary.total);
    let _ = writeln!(out, "Invalid: {}", summary.invalid);

    if !summary.by_category.is_empty() {
        let width = summary
            .by_category
            .keys()
            .map(|c| c.as_str().len())
            .max()
            .unwrap_or(0);
        let _ = writeln!(out, "By category:");
        for (category, count) in &summary.by_category {
            let _ = writeln!(out, "  {:<width$}  {count}", category.as_str());
        }
    }

    let rows = outcome.invalid_preview(preview);
    if !rows.is_empty() {
        let width = rows
            .iter()
            .map(|(mmsi, _)| mmsi.len())
            .max()
            .unwrap_or(0)
            .max("mmsi".len());
        let _ = writeln!(out, "Invalid record preview:");
        let _ = writeln!(out, "  {:<width$}  mmsi_note", "mmsi");
        for (mmsi, note) in rows {
            let _ = writeln!(out, "  {mmsi:<width$}  {note}");
        }
    }
    out
}
