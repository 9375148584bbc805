//! I/O helpers for the reporter.

pub mod config;
pub mod state_file;
