//! Output line rendering

use chrono::DateTime;
use rqsift_core::LogEvent;

/// How each printed line is prefixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePrefix {
    /// Message only.
    None,
    /// `(millis) message`
    Millis,
    /// `(iso-8601 UTC) message`
    Iso,
}

/// Render one retained event as a single output line.
pub fn render(event: &LogEvent, prefix: LinePrefix) -> String {
    match prefix {
        LinePrefix::None => event.message.clone(),
        LinePrefix::Millis => format!("({}) {}", event.timestamp, event.message),
        LinePrefix::Iso => format!("({}) {}", iso_utc(event.timestamp), event.message),
    }
}

/// Format a millisecond timestamp as RFC 3339 UTC with millisecond precision.
/// Timestamps outside the representable range fall back to the raw number.
fn iso_utc(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(datetime) => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        None => millis.to_string(),
    }
}
