//! Tracing/logging setup shared by probill binaries.

pub mod subscriber;

pub use subscriber::LogFormat;

/// Initialize process-wide tracing with the format chosen by
/// `PROBILL_LOG_FORMAT` (`json` by default, or `pretty`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init(LogFormat::from_env());
}
