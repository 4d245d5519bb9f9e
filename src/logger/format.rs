use chrono::Local;
use colored::{ColoredString, Colorize};

use super::levels::LogLevel;
use super::tags::LogTag;

/// Fixed column width so log lines align across tags.
const TAG_WIDTH: usize = 8;

pub fn format_and_print(tag: LogTag, level: LogLevel, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();
    let line = format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        color_tag(tag),
        color_level(level),
        message
    );
    println!("{}", line);
}

fn color_tag(tag: LogTag) -> ColoredString {
    let padded = format!("{:<width$}", tag.as_str(), width = TAG_WIDTH);
    match tag {
        LogTag::Main => padded.bright_white(),
        LogTag::Filters => padded.bright_cyan(),
        LogTag::Query => padded.bright_blue(),
        LogTag::Catalog => padded.bright_green(),
        LogTag::Cache => padded.bright_magenta(),
        LogTag::Events => padded.bright_yellow(),
    }
}

fn color_level(level: LogLevel) -> ColoredString {
    match level {
        LogLevel::Error => level.as_str().bright_red().bold(),
        LogLevel::Warning => level.as_str().yellow(),
        LogLevel::Info => level.as_str().normal(),
        LogLevel::Debug => level.as_str().dimmed(),
    }
}
