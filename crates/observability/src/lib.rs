//! Tracing/logging setup shared by the test harnesses.

/// Tracing configuration (filters, formatters).
pub mod tracing;

/// Initialize human-readable logging captured by the test harness.
pub fn init_for_tests() {
    tracing::init_for_tests();
}
