//! Window bound parsing
//!
//! Turns the `--start`/`--stop` ISO-8601 strings into epoch milliseconds.
//! Values without an offset are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Time bound parse error
#[derive(Debug, Error)]
#[error("unrecognized time bound '{0}': expected ISO-8601 such as 2024-05-01T12:30:00Z or 2024-05-01")]
pub struct TimeParseError(String);

/// Parse an ISO-8601 date or datetime into epoch milliseconds.
///
/// Accepts RFC 3339 with an offset, a naive datetime with or without
/// fractional seconds, or a bare date (midnight UTC).
pub fn parse_millis(text: &str) -> Result<i64, TimeParseError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.timestamp_millis());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc().timestamp_millis());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().timestamp_millis());
        }
    }

    Err(TimeParseError(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_utc() {
        assert_eq!(
            parse_millis("2024-05-01T12:30:00Z").unwrap(),
            1_714_566_600_000
        );
    }

    #[test]
    fn test_rfc3339_offset_is_normalized() {
        assert_eq!(
            parse_millis("2024-05-01T14:30:00+02:00").unwrap(),
            1_714_566_600_000
        );
    }

    #[test]
    fn test_naive_datetime_is_read_as_utc() {
        assert_eq!(
            parse_millis("2024-05-01T12:30:00").unwrap(),
            1_714_566_600_000
        );
    }

    #[test]
    fn test_space_separated_datetime() {
        assert_eq!(
            parse_millis("2024-05-01 12:30:00").unwrap(),
            1_714_566_600_000
        );
    }

    #[test]
    fn test_fractional_seconds_survive() {
        assert_eq!(
            parse_millis("2024-05-01T12:30:00.250Z").unwrap(),
            1_714_566_600_250
        );
        assert_eq!(
            parse_millis("2024-05-01T12:30:00.250").unwrap(),
            1_714_566_600_250
        );
    }

    #[test]
    fn test_bare_date_is_midnight_utc() {
        assert_eq!(parse_millis("2024-05-01").unwrap(), 1_714_521_600_000);
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = parse_millis("yesterday").unwrap_err();
        assert!(err.to_string().contains("yesterday"));

        assert!(parse_millis("").is_err());
        assert!(parse_millis("2024-13-01").is_err());
    }
}
