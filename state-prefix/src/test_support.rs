//! Test-only helpers for building deployment state fixtures on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::io::state_file::DEFAULT_STATE_PATH;

/// Config file name used by fixtures; passed explicitly via `--config`.
pub const CONFIG_FILE: &str = "state-prefix.toml";

/// Empty temporary project directory.
pub fn temp_project() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

/// A trimmed-down state document shaped like the deployment tool's output.
pub fn state_json(bucket: &str, prefix: &str) -> Value {
    json!({
        "service": {
            "service": "demo-api",
            "provider": {
                "name": "aws",
                "region": "us-east-1",
                "deploymentBucket": bucket,
            },
        },
        "package": {
            "artifactDirectoryName": prefix,
            "artifact": "demo-api.zip",
        },
    })
}

/// Write `state` to `dist/serverless-state.json` under `root`.
pub fn write_state(root: &Path, state: &Value) -> PathBuf {
    write_state_at(root, DEFAULT_STATE_PATH, state)
}

/// Write `state` as pretty JSON to `relative` under `root`.
pub fn write_state_at(root: &Path, relative: &str, state: &Value) -> PathBuf {
    let payload = serde_json::to_string_pretty(state).expect("serialize state");
    write_file(&root.join(relative), &payload)
}

/// Write raw (possibly invalid) contents to the default state path.
pub fn write_state_raw(root: &Path, contents: &str) -> PathBuf {
    write_file(&root.join(DEFAULT_STATE_PATH), contents)
}

/// Write raw bytes to the default state path.
pub fn write_state_bytes(root: &Path, contents: &[u8]) -> PathBuf {
    write_file(&root.join(DEFAULT_STATE_PATH), contents)
}

/// Write [`CONFIG_FILE`] under `root`.
pub fn write_config(root: &Path, contents: &str) -> PathBuf {
    write_file(&root.join(CONFIG_FILE), contents)
}

fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture directory");
    }
    fs::write(path, contents).expect("write fixture");
    path.to_path_buf()
}
