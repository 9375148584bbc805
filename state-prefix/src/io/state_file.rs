//! Loading the deployment state file written by the packaging step.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

/// State file location relative to the project root.
pub const DEFAULT_STATE_PATH: &str = "dist/serverless-state.json";

/// Read and parse the state file into an untyped JSON value.
///
/// The document shape is not checked here; callers project the fields
/// they need.
pub fn load_state(path: &Path) -> Result<Value> {
    debug!(path = %path.display(), "loading deployment state");
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read state file {}", path.display()))?;
    let state: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse state file {}", path.display()))?;
    debug!(bytes = contents.len(), "deployment state parsed");
    Ok(state)
}
