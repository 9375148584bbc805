//! Stable exit codes for the `state-prefix` CLI.

/// Storage location was printed.
pub const OK: i32 = 0;
/// State file or config could not be read, parsed, or projected.
pub const FAILURE: i32 = 1;
