//! Diagnostic tracing for the reporter.
//!
//! Events are emitted at the config load, state load and projection steps
//! (`debug!` for file access, `info!` once the location is resolved). The
//! report line is the only stdout output, so the subscriber writes to
//! stderr. `RUST_LOG` picks the verbosity and has no effect on stdout or
//! the exit code.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset or unparseable.
///
/// # Example
/// ```bash
/// RUST_LOG=state_prefix=debug state-prefix
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
