//! Query parameters for one retrieval window

use serde::{Deserialize, Serialize};

/// Immutable description of one retrieval: which group, which streams,
/// which time window, and an optional result cap.
///
/// Stream names and the stream prefix are independent narrowing knobs.
/// Both may be set at once; precedence between them belongs to the remote
/// source, not to this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    /// Log group to query.
    pub group: String,

    /// Explicit stream names. Empty means not narrowed by name.
    pub streams: Vec<String>,

    /// Stream name prefix.
    pub stream_prefix: Option<String>,

    /// Window start, milliseconds since the epoch.
    pub start_time: Option<i64>,

    /// Window end, milliseconds since the epoch.
    pub end_time: Option<i64>,

    /// Cap on the number of events the source should return.
    pub limit: Option<u32>,
}

impl QueryParameters {
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            streams: Vec::new(),
            stream_prefix: None,
            start_time: None,
            end_time: None,
            limit: None,
        }
    }

    pub fn with_streams(mut self, streams: Vec<String>) -> Self {
        self.streams = streams;
        self
    }

    pub fn with_stream_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.stream_prefix = Some(prefix.into());
        self
    }

    pub fn with_start_time(mut self, millis: i64) -> Self {
        self.start_time = Some(millis);
        self
    }

    pub fn with_end_time(mut self, millis: i64) -> Self {
        self.end_time = Some(millis);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}
