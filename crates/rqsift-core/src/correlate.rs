//! The correlation filter
//!
//! One matching line keeps the whole request. Pass one scans every cleaned
//! message for the content pattern and collects the request identifiers of
//! the matches; pass two keeps exactly the events tagged with a collected
//! identifier, in their original order.

use crate::event::{LogEvent, RequestId};
use regex::Regex;
use std::collections::HashSet;
use thiserror::Error;

/// Pattern compilation error, surfaced before any retrieval work is spent.
#[derive(Error, Debug)]
#[error("invalid content pattern: {0}")]
pub struct PatternError(#[from] regex::Error);

/// User-supplied content pattern, matched anywhere in cleaned messages.
#[derive(Debug, Clone)]
pub struct ContentPattern(Regex);

impl ContentPattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self(Regex::new(pattern)?))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Filter `events` down to the requests the pattern touches.
///
/// Expects the window the retriever produced; the relative order of the
/// input is preserved in the output. Each message is trimmed of surrounding
/// whitespace exactly once here, and the trimmed text is both what gets
/// matched and what callers print.
///
/// Events without an extractable request identifier are dropped, even when
/// their own text matches: with no identifier there is no request to
/// correlate with.
pub fn correlate(mut events: Vec<LogEvent>, pattern: &ContentPattern) -> Vec<LogEvent> {
    let mut matching: HashSet<RequestId> = HashSet::new();

    for event in &mut events {
        let cleaned = event.message.trim();
        if cleaned.len() != event.message.len() {
            event.message = cleaned.to_string();
        }

        event.request_id = RequestId::find_in(&event.message);

        if let Some(id) = &event.request_id {
            if pattern.is_match(&event.message) {
                matching.insert(id.clone());
            }
        }
    }

    events.retain(|event| {
        event
            .request_id
            .as_ref()
            .is_some_and(|id| matching.contains(id))
    });

    events
}
