//! Report orchestration for the `state-prefix` CLI.
//!
//! Resolves the state file and output format (flag, then the `--config`
//! file if one was named, then default), loads the state, and renders the single output line. Nothing
//! is rendered until the whole file has been read, parsed and projected.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::core::location::StorageLocation;
use crate::io::config::{OutputFormat, ReporterConfig, load_config};
use crate::io::state_file::load_state;

/// Caller overrides. `None` falls back to the named config file, if any,
/// then to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRequest {
    pub state_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

/// Projected location plus the format it will be rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub location: StorageLocation,
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct LocationJson<'a> {
    bucket: &'a str,
    prefix: &'a str,
    uri: String,
}

impl Report {
    /// Render the output line, without the trailing newline.
    pub fn render(&self) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.location.uri()),
            OutputFormat::Json => {
                let payload = LocationJson {
                    bucket: &self.location.bucket,
                    prefix: &self.location.prefix,
                    uri: self.location.uri(),
                };
                serde_json::to_string(&payload).context("serialize report json")
            }
        }
    }
}

/// Build the report for a project rooted at `root`.
///
/// Relative paths, whether from the request or the config file, resolve
/// against `root`.
pub fn report_from_root(root: &Path, request: &ReportRequest) -> Result<Report> {
    let config = match request.config_path.as_deref() {
        Some(path) => load_config(&root.join(path))?,
        None => ReporterConfig::default(),
    };

    let state_path = root.join(
        request
            .state_path
            .as_deref()
            .unwrap_or(config.state_path.as_path()),
    );
    let format = request.format.unwrap_or(config.format);

    let state = load_state(&state_path)?;
    let location = StorageLocation::from_state(&state)
        .with_context(|| format!("project storage location from {}", state_path.display()))?;
    info!(
        bucket = %location.bucket,
        prefix = %location.prefix,
        path = %state_path.display(),
        "storage location resolved"
    );
    Ok(Report { location, format })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        CONFIG_FILE, state_json, temp_project, write_config, write_state, write_state_at,
    };

    fn with_config() -> ReportRequest {
        ReportRequest {
            config_path: Some(PathBuf::from(CONFIG_FILE)),
            ..ReportRequest::default()
        }
    }

    #[test]
    fn default_request_reads_dist_state() {
        let temp = temp_project();
        write_state(temp.path(), &state_json("my-bucket", "abc123"));

        let report = report_from_root(temp.path(), &ReportRequest::default()).expect("report");
        assert_eq!(report.format, OutputFormat::Text);
        assert_eq!(report.render().expect("render"), "s3://my-bucket/abc123");
    }

    #[test]
    fn config_state_path_replaces_default() {
        let temp = temp_project();
        write_state_at(
            temp.path(),
            "build/state.json",
            &state_json("from-config", "p1"),
        );
        write_config(temp.path(), "state_path = \"build/state.json\"\n");

        let report = report_from_root(temp.path(), &with_config()).expect("report");
        assert_eq!(report.location.bucket, "from-config");
    }

    #[test]
    fn unnamed_config_file_is_ignored() {
        let temp = temp_project();
        write_state(temp.path(), &state_json("my-bucket", "abc123"));
        write_config(temp.path(), "unrelated = 1\n");

        let report = report_from_root(temp.path(), &ReportRequest::default()).expect("report");
        assert_eq!(report.render().expect("render"), "s3://my-bucket/abc123");
    }

    #[test]
    fn missing_named_config_is_an_error() {
        let temp = temp_project();
        write_state(temp.path(), &state_json("my-bucket", "abc123"));

        let err = report_from_root(temp.path(), &with_config()).expect_err("missing config");
        let message = format!("{:#}", err);
        assert!(message.starts_with("read "), "{message}");
        assert!(message.contains(CONFIG_FILE), "{message}");
    }

    #[test]
    fn request_overrides_config() {
        let temp = temp_project();
        write_state_at(temp.path(), "a.json", &state_json("from-config", "p1"));
        write_state_at(temp.path(), "b.json", &state_json("from-flag", "p2"));
        write_config(
            temp.path(),
            "state_path = \"a.json\"\nformat = \"json\"\n",
        );

        let request = ReportRequest {
            state_path: Some(PathBuf::from("b.json")),
            format: Some(OutputFormat::Text),
            ..with_config()
        };
        let report = report_from_root(temp.path(), &request).expect("report");
        assert_eq!(report.render().expect("render"), "s3://from-flag/p2");
    }

    #[test]
    fn explicit_config_path_is_used() {
        let temp = temp_project();
        write_state_at(temp.path(), "other.json", &state_json("bucket", "prefix"));
        std::fs::write(
            temp.path().join("ci.toml"),
            "state_path = \"other.json\"\n",
        )
        .expect("write config");

        let request = ReportRequest {
            config_path: Some(PathBuf::from("ci.toml")),
            ..ReportRequest::default()
        };
        let report = report_from_root(temp.path(), &request).expect("report");
        assert_eq!(report.location.uri(), "s3://bucket/prefix");
    }

    #[test]
    fn json_render_is_single_compact_line() {
        let report = Report {
            location: StorageLocation {
                bucket: "my-bucket".to_string(),
                prefix: "abc123".to_string(),
            },
            format: OutputFormat::Json,
        };
        assert_eq!(
            report.render().expect("render"),
            r#"{"bucket":"my-bucket","prefix":"abc123","uri":"s3://my-bucket/abc123"}"#
        );
    }

    #[test]
    fn projection_error_names_state_file() {
        let temp = temp_project();
        write_state(
            temp.path(),
            &serde_json::json!({ "package": { "artifactDirectoryName": "abc123" } }),
        );

        let err = report_from_root(temp.path(), &ReportRequest::default()).expect_err("missing");
        let message = format!("{:#}", err);
        assert!(message.contains("serverless-state.json"), "{message}");
        assert!(
            message.contains("missing field 'service.provider.deploymentBucket'"),
            "{message}"
        );
    }

    #[test]
    fn invalid_config_fails_before_state_is_read() {
        let temp = temp_project();
        write_config(temp.path(), "format = \"yaml\"\n");

        let err = report_from_root(temp.path(), &with_config()).expect_err("config");
        let message = format!("{:#}", err);
        assert!(message.contains("state-prefix.toml"), "{message}");
        assert!(!message.contains("state file"), "{message}");
    }
}
