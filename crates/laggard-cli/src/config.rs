use anyhow::{Context, Result};
use laggard_core::analyze::DEFAULT_ERROR_THRESHOLD;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where the report command looks for its config when --config is not given
pub const DEFAULT_CONFIG_PATH: &str = "./laggard.toml";

/// Runtime configuration for the report command
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum number of URLs kept in the report
    pub report_size: usize,
    /// Directory the HTML reports are written to
    pub report_dir: PathBuf,
    /// Directory scanned for rotated access logs
    pub log_dir: PathBuf,
    /// File updated with the unix time of the last successful run
    pub timestamp_file: PathBuf,
    /// Minimum fraction of parseable lines required to produce a report
    pub error_threshold: f64,
    /// Optional override for the embedded HTML template
    pub template_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_size: 1000,
            report_dir: PathBuf::from("./reports"),
            log_dir: PathBuf::from("./logs"),
            timestamp_file: PathBuf::from("./laggard_timestamp.txt"),
            error_threshold: DEFAULT_ERROR_THRESHOLD,
            template_file: None,
        }
    }
}

impl Config {
    /// Load the config for a run
    ///
    /// An explicitly passed path must exist and parse. The default path may
    /// be absent, in which case built-in defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    tracing::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
