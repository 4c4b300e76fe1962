//! # mmsi-cli — MMSI Validation Command-Line Interface
//!
//! Provides the `mmsi` binary.
//!
//! ## Subcommands
//!
//! - `mmsi validate` — Classify every record of a detection CSV and write a
//!   highlighted Excel report.
//! - `mmsi check` — Classify identities given as arguments.
//!
//! ```bash
//! mmsi validate --input detections.csv --output validation.xlsx
//! mmsi check 525005123 970123456 --json
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing and console output only. Classification lives in
//!   `mmsi-core`, file handling in `mmsi-batch`.

pub mod check;
pub mod config;
pub mod validate;

pub use config::{load_config, CliConfig, CONFIG_FILE_NAME};

