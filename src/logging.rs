//! Tracing/logging initialization.
//!
//! Logs go to stderr so they never interleave with the menu on stdout.
//! `RUST_LOG` wins when set; otherwise `--verbose` turns on debug events
//! for this crate and the default is warnings only.

use tracing_subscriber::EnvFilter;

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "backpack=debug" } else { "warn" }
}

/// Initialize tracing for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
