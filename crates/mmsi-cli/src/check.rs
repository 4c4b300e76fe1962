//! # Check Subcommand
//!
//! Classifies identities given on the command line, without any file I/O.
//! Exits 0 when every identity is valid and 2 when any is not, so the
//! command can gate shell pipelines.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use mmsi_core::{classify, ClassificationResult};

/// Exit code when at least one identity is invalid.
pub const EXIT_INVALID: u8 = 2;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// One or more MMSI values to classify. Pass values that start with a
    /// letter after a hyphen behind `--`.
    #[arg(required = true, allow_negative_numbers = true)]
    pub identities: Vec<String>,

    /// Emit a JSON array instead of aligned text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CheckedIdentity<'a> {
    mmsi: &'a str,
    #[serde(flatten)]
    result: &'a ClassificationResult,
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let results: Vec<ClassificationResult> =
        args.identities.iter().map(|s| classify(s)).collect();
    let invalid = results.iter().filter(|r| !r.valid).count();
    tracing::debug!(checked = results.len(), invalid, "classified identities");

    let rendered = if args.json {
        render_json(&args.identities, &results)?
    } else {
        render_text(&args.identities, &results)
    };
    print!("{rendered}");

    Ok(if invalid == 0 { 0 } else { EXIT_INVALID })
}

/// One line per identity: value, verdict, category, note.
pub fn render_text(identities: &[String], results: &[ClassificationResult]) -> String {
    let width = identities.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (mmsi, r) in identities.iter().zip(results) {
        let verdict = if r.valid { "valid" } else { "INVALID" };
        let _ = writeln!(
            out,
            "{mmsi:<width$}  {verdict:<7}  {:<16}  {}",
            r.category.as_str(),
            r.note
        );
    }
    out
}

/// Pretty JSON array of `{mmsi, valid, category, note, failure?}`.
pub fn render_json(identities: &[String], results: &[ClassificationResult]) -> Result<String> {
    let entries: Vec<CheckedIdentity<'_>> = identities
        .iter()
        .zip(results)
        .map(|(mmsi, result)| CheckedIdentity { mmsi, result })
        .collect();
    let mut json = serde_json::to_string_pretty(&entries).context("failed to encode results")?;
    json.push('\n');
    Ok(json)
}
