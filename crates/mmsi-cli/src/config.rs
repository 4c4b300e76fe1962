//! # Configuration File
//!
//! Optional YAML file supplying defaults for the `validate` subcommand.
//! Looked up at the `--config` path when given, otherwise as `mmsi.yaml`
//! in the working directory. A missing discovered file is not an error; a
//! missing explicit file is.
//!
//! ```yaml
//! input: data/sar_vessel_detections.csv
//! output: out/mmsi_validation.xlsx
//! column: mmsi
//! preview: 10
//! sheet_name: MMSI Validation
//! ```
//!
//! Precedence is command-line flag, then this file, then built-in default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "mmsi.yaml";

/// Values read from the configuration file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub column: Option<String>,
    pub preview: Option<usize>,
    pub sheet_name: Option<String>,
}

impl CliConfig {
    /// Parse a configuration document. Blank documents yield defaults.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).context("invalid configuration")
    }
}

/// Resolve and load the configuration.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<CliConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let discovered = cwd.join(CONFIG_FILE_NAME);
            if !discovered.is_file() {
                tracing::debug!("no configuration file found; using defaults");
                return Ok(CliConfig::default());
            }
            discovered
        }
    };

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read configuration: {}", path.display()))?;
    let config = CliConfig::from_yaml(&contents)
        .with_context(|| format!("in {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}
