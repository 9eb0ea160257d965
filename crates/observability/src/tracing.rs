//! Tracing/logging initialization for the gateway process.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset: gateway crates at `info`,
/// the HTTP stack's own chatter held to `warn`.
const DEFAULT_DIRECTIVES: &str = "info,hyper=warn,tower=warn";

/// Initialize tracing/logging for the process.
///
/// JSON lines on stdout, one event per line, filterable via `RUST_LOG`.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(true)
        .with_current_span(false)
        .try_init();
}
