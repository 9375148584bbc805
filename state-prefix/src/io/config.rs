//! Optional reporter configuration, read only when `--config` names a file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use serde::Deserialize;
use tracing::debug;

use crate::io::state_file::DEFAULT_STATE_PATH;

/// How the storage location is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `s3://<bucket>/<prefix>`
    #[default]
    Text,
    /// One compact JSON object with `bucket`, `prefix` and `uri`.
    Json,
}

/// Reporter configuration (TOML).
///
/// Every field is optional. Command-line flags take precedence. Without
/// `--config` the built-in defaults apply and no file is consulted.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ReporterConfig {
    /// State file to read, relative to the working directory.
    pub state_path: PathBuf,

    pub format: OutputFormat,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            format: OutputFormat::default(),
        }
    }
}

impl ReporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.state_path.as_os_str().is_empty() {
            return Err(anyhow!("state_path must not be empty"));
        }
        Ok(())
    }
}

/// Load config from an explicitly named TOML file.
///
/// A missing or unreadable file is an error.
pub fn load_config(path: &Path) -> Result<ReporterConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ReporterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), state_path = %cfg.state_path.display(), "config loaded");
    Ok(cfg)
}
