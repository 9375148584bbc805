//! Storage location of a packaged deployment artifact.

use std::fmt;

use anyhow::Result;
use serde_json::Value;

use crate::core::fields::{ARTIFACT_DIRECTORY, DEPLOYMENT_BUCKET, require_str};

/// Bucket and key prefix under which the deployment tool uploaded the artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    pub bucket: String,
    pub prefix: String,
}

impl StorageLocation {
    /// Project the location from a parsed deployment state document.
    ///
    /// The artifact directory is checked before the bucket, so a document
    /// missing both always reports the artifact directory.
    pub fn from_state(state: &Value) -> Result<Self> {
        let prefix = require_str(state, ARTIFACT_DIRECTORY)?;
        let bucket = require_str(state, DEPLOYMENT_BUCKET)?;
        Ok(Self {
            bucket: bucket.to_string(),
            prefix: prefix.to_string(),
        })
    }

    /// `s3://{bucket}/{prefix}`, interpolated verbatim.
    pub fn uri(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.prefix)
    }
}
