//! Tracing/logging setup shared by binaries, benches and test harnesses.

/// Initialize process-wide tracing/logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize a subscriber that writes through the test harness capture.
pub fn init_for_tests() {
    tracing::init_for_tests();
}

/// Tracing configuration (filters, output formats).
pub mod tracing;

pub use self::tracing::LogFormat;
