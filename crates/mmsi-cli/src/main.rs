//! # mmsi CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file,
//! and dispatches to subcommand handlers.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mmsi_cli::check::{run_check, CheckArgs};
use mmsi_cli::load_config;
use mmsi_cli::validate::{run_validate, ValidateArgs};

/// MMSI validation for the Indonesian maritime numbering plan.
///
/// Classifies Maritime Mobile Service Identities by station category and
/// flags identities that are structurally invalid.
#[derive(Parser, Debug)]
#[command(name = "mmsi", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file. Defaults to ./mmsi.yaml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate every MMSI in a CSV file and write a highlighted report.
    Validate(ValidateArgs),

    /// Classify MMSI values given on the command line.
    Check(CheckArgs),
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Run the selected subcommand. Only `validate` reads the configuration.
fn dispatch(cli: Cli, cwd: &Path) -> Result<u8> {
    match cli.command {
        Commands::Validate(args) => {
            let config = load_config(cli.config.as_deref(), cwd)?;
            run_validate(&args, &config)
        }
        Commands::Check(args) => run_check(&args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(cli.verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("mmsi CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match dispatch(cli, &cwd) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
