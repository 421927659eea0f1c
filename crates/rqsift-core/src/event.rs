//! Log events and request identifier extraction

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

// Five dash-joined groups of lowercase hex digits, 8-4-4-4-12. Matching is
// purely lexical; nothing beyond the shape is ever checked.
static REQUEST_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}").unwrap()
});

/// Correlation identifier shared by every log line of one request.
///
/// Treated as opaque text once extracted. Hashable and cheap to clone so
/// identifiers can key the matching set built by the correlation filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Find the first request identifier in a message, if any.
    pub fn find_in(message: &str) -> Option<RequestId> {
        REQUEST_ID
            .find(message)
            .map(|m| RequestId(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single log event as retrieved from the remote store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Creation time recorded by the source, milliseconds since the epoch.
    pub timestamp: i64,

    /// Log text. The correlation filter trims surrounding whitespace exactly
    /// once; the trimmed form is what gets matched and printed.
    pub message: String,

    /// Identifier extracted from the message, absent when no identifier
    /// pattern occurs. Attached by the correlation filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
}

impl LogEvent {
    pub fn new(timestamp: i64, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
            request_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_request_id() {
        let id = RequestId::find_in("abcdef01-2345-6789-abcd-ef0123456789 request started");
        assert_eq!(
            id.map(|i| i.as_str().to_string()),
            Some("abcdef01-2345-6789-abcd-ef0123456789".to_string())
        );
    }

    #[test]
    fn test_find_request_id_mid_message() {
        let id = RequestId::find_in("worker handling abcdef01-2345-6789-abcd-ef0123456789 now");
        assert!(id.is_some());
    }

    #[test]
    fn test_first_identifier_wins() {
        let message = "first aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa \
                       then bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbbb";
        let id = RequestId::find_in(message).unwrap();
        assert_eq!(id.as_str(), "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa");
    }

    #[test]
    fn test_no_identifier() {
        assert!(RequestId::find_in("plain log line without any id").is_none());
    }

    #[test]
    fn test_uppercase_hex_rejected() {
        assert!(RequestId::find_in("ABCDEF01-2345-6789-ABCD-EF0123456789").is_none());
    }

    #[test]
    fn test_short_groups_rejected() {
        // Final group one digit short of twelve
        assert!(RequestId::find_in("abcdef01-2345-6789-abcd-ef012345678").is_none());
    }

    #[test]
    fn test_non_hex_rejected() {
        assert!(RequestId::find_in("ghijklmn-opqr-stuv-wxyz-ghijklmnopqr").is_none());
    }

    #[test]
    fn test_display_round_trips() {
        let raw = "abcdef01-2345-6789-abcd-ef0123456789";
        let id = RequestId::find_in(raw).unwrap();
        assert_eq!(format!("{}", id), raw);
    }
}
