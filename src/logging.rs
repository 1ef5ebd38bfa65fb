//! Diagnostic tracing
//!
//! Log events go to stderr and are controlled by `RUST_LOG`. They never reach
//! stdout or the concatenated artifact.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn` so per-file read errors and
/// unlistable directories are reported.
///
/// ```bash
/// RUST_LOG=treecat=debug treecat lib -s .dart
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
