//! Dotted-path projection over an untyped JSON document.

use anyhow::{Result, bail};
use serde_json::Value;

/// Path of the packaged artifact directory name in the deployment state.
pub const ARTIFACT_DIRECTORY: &str = "package.artifactDirectoryName";
/// Path of the deployment bucket name in the deployment state.
pub const DEPLOYMENT_BUCKET: &str = "service.provider.deploymentBucket";

/// Return the non-empty string stored at a dot-separated key path.
///
/// Every segment must name a key of a JSON object. Errors name the full
/// path and say whether the key was missing, the value had the wrong type,
/// or the string was empty.
pub fn require_str<'a>(value: &'a Value, path: &str) -> Result<&'a str> {
    let mut current = value;
    for segment in path.split('.') {
        current = match current.get(segment) {
            Some(next) => next,
            None => bail!("missing field '{path}'"),
        };
    }
    match current {
        Value::String(text) if text.is_empty() => bail!("field '{path}' is empty"),
        Value::String(text) => Ok(text.as_str()),
        other => bail!(
            "field '{path}' must be a string, found {}",
            json_type(other)
        ),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
