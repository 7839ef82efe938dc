//! Tracing/logging initialization.
//!
//! Filtering comes from `RUST_LOG` (default `debug` under test).

use tracing_subscriber::EnvFilter;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Plain-text logs routed through the test writer so `cargo test` only shows
/// them for failing tests.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("debug"))
        .with_test_writer()
        .try_init();
}
