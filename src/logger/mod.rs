//! Structured logging for arremate
//!
//! Provides a small, ergonomic logging API:
//! - Standard log levels (Error/Warning/Info/Debug)
//! - Per-area debug control via `--debug <area>` flags on the demo binary
//! - Colored console output with timestamps
//!
//! Call `logger::init()` once at startup, then use the level functions:
//!
//! ```ignore
//! logger::info(LogTag::Catalog, "page computed");
//! logger::debug(LogTag::Query, "filter subset changed"); // only if enabled
//! ```

mod config;
mod format;
mod levels;
mod tags;

pub use config::{enable_debug_for, enable_debug_for_name, set_min_level};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger with default settings. Must run before any
/// logging; repeated calls reset the configuration.
pub fn init() {
    config::reset();
}

/// Log at ERROR level (always shown).
pub fn error(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level.
pub fn warning(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level.
pub fn info(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level; gated by the per-tag debug toggle.
pub fn debug(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Debug, message);
}

fn should_log(tag: LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }
    if level == LogLevel::Debug {
        return config::is_debug_enabled_for(tag);
    }
    level <= config::min_level()
}

fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(tag, level) {
        return;
    }
    format::format_and_print(tag, level, message);
}
