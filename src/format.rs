//! Line formatting: timestamps, headers and argument rendering

use chrono::{DateTime, Local};
use colored::Color;

use crate::level::Level;
use crate::types::{ErrorRecord, LogValue};

const SECONDS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const MILLIS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// `YYYY-MM-DD HH:MM:SS`
pub(crate) fn timestamp(at: &DateTime<Local>) -> String {
    at.format(SECONDS_FORMAT).to_string()
}

/// `YYYY-MM-DD HH:MM:SS.mmm`
pub(crate) fn timestamp_millis(at: &DateTime<Local>) -> String {
    at.format(MILLIS_FORMAT).to_string()
}

/// ` #a #b` for tags `["a", "b"]`
pub(crate) fn tag_suffix(tags: &[String]) -> String {
    tags.iter().map(|tag| format!(" #{}", tag)).collect()
}

/// `[<stamp>] <LABEL><tag-suffix>`, optionally colorized by level
pub(crate) fn header(level: Level, stamp: &str, tags: &[String], colorize: bool) -> String {
    paint(level, format!("[{}] {}{}", stamp, level.label(), tag_suffix(tags)), colorize)
}

/// Wrap `text` in the level's foreground color escape
pub(crate) fn paint(level: Level, text: String, colorize: bool) -> String {
    match level_color(level) {
        Some(color) if colorize => format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text),
        _ => text,
    }
}

fn level_color(level: Level) -> Option<Color> {
    match level {
        Level::Error => Some(Color::Red),
        Level::Warn => Some(Color::Magenta),
        Level::Log => Some(Color::BrightBlack),
        Level::Debug => Some(Color::Blue),
        Level::Profile => Some(Color::White),
        Level::None => None,
    }
}

/// Join a header and its arguments with single spaces
pub(crate) fn line<I>(header: String, args: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut out = header;
    for arg in args {
        out.push(' ');
        out.push_str(&arg);
    }
    out
}

/// Render `error` arguments: an error-like last value becomes
/// `{name} message` plus its stack without the first line.
pub(crate) fn error_args(args: &[LogValue]) -> Vec<String> {
    let Some((last, rest)) = args.split_last() else {
        return Vec::new();
    };
    let mut rendered: Vec<String> = rest.iter().map(ToString::to_string).collect();
    match last.as_error_like() {
        Some(record) => rendered.push(render_error(&record)),
        None => rendered.push(last.to_string()),
    }
    rendered
}

fn render_error(record: &ErrorRecord) -> String {
    let name = record.name.as_deref().unwrap_or_default();
    let message = record.message.as_deref().unwrap_or_default();
    let trace = record
        .stack
        .as_deref()
        .map(|stack| stack.lines().skip(1).collect::<Vec<_>>().join("\n"))
        .unwrap_or_default();

    if trace.is_empty() {
        format!("{{{}}} {}", name, message)
    } else {
        format!("{{{}}} {}\n{}", name, message, trace)
    }
}
