//! Shared tracing/logging setup for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging: JSON lines to stdout, filtered by
/// `RUST_LOG` (default `info`).
///
/// Safe to call multiple times; subsequent calls are no-ops, so test
/// binaries can initialize without coordinating.
pub fn init() {
    init_with_default_filter("info");
}

/// Same as [`init`], with an explicit fallback filter for when `RUST_LOG`
/// is unset.
pub fn init_with_default_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
