use std::collections::HashSet;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::levels::LogLevel;
use super::tags::LogTag;

#[derive(Debug, Clone)]
struct LoggerConfig {
    min_level: LogLevel,
    debug_tags: HashSet<LogTag>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
        }
    }
}

static CONFIG: Lazy<RwLock<LoggerConfig>> = Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Restore the default configuration (Info level, no debug tags).
pub fn reset() {
    *CONFIG.write() = LoggerConfig::default();
}

pub fn set_min_level(level: LogLevel) {
    CONFIG.write().min_level = level;
}

pub fn min_level() -> LogLevel {
    CONFIG.read().min_level
}

/// Enable DEBUG output for one area.
pub fn enable_debug_for(tag: LogTag) {
    CONFIG.write().debug_tags.insert(tag);
}

/// Enable DEBUG output for an area given its CLI name; unknown names are
/// ignored with a console note rather than failing startup.
pub fn enable_debug_for_name(name: &str) {
    match LogTag::from_name(name) {
        Some(tag) => enable_debug_for(tag),
        None => eprintln!("unknown debug area: {}", name),
    }
}

pub fn is_debug_enabled_for(tag: LogTag) -> bool {
    CONFIG.read().debug_tags.contains(&tag)
}
