//! Report the storage location of a packaged serverless deployment.
//!
//! The deployment tool writes `dist/serverless-state.json` after packaging.
//! This crate reads that file, projects the artifact directory name and the
//! deployment bucket, and renders them as `s3://<bucket>/<prefix>`.
//!
//! - **[`core`]**: Pure projection and rendering. No I/O.
//! - **[`io`]**: Reading the state file and the optional TOML config.
//!
//! [`report`] ties the two together for the CLI.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
