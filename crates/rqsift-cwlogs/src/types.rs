//! Wire types for the FilterLogEvents JSON protocol

use rqsift_core::{LogEvent, QueryParameters};
use serde::{Deserialize, Serialize};

/// FilterLogEvents request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterLogEventsRequest {
    /// Log group to query
    pub log_group_name: String,

    /// Explicit stream names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream_names: Option<Vec<String>>,

    /// Stream name prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream_name_prefix: Option<String>,

    /// Window start, milliseconds since the epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,

    /// Window end, milliseconds since the epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,

    /// Result cap for the whole query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Continuation token from the previous page, echoed verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl FilterLogEventsRequest {
    /// Build the wire request for one page of `params`.
    pub fn from_query(params: &QueryParameters, token: Option<&str>) -> Self {
        Self {
            log_group_name: params.group.clone(),
            log_stream_names: if params.streams.is_empty() {
                None
            } else {
                Some(params.streams.clone())
            },
            log_stream_name_prefix: params.stream_prefix.clone(),
            start_time: params.start_time,
            end_time: params.end_time,
            limit: params.limit,
            next_token: token.map(String::from),
        }
    }
}

/// FilterLogEvents response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterLogEventsResponse {
    /// Events of this page, in source order
    #[serde(default)]
    pub events: Vec<FilteredLogEvent>,

    /// Continuation token, absent on the terminating page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Per-stream search status
    #[serde(default)]
    pub searched_log_streams: Vec<SearchedLogStream>,
}

/// One event on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredLogEvent {
    /// Stream the event came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_stream_name: Option<String>,

    /// Creation time, milliseconds since the epoch
    pub timestamp: i64,

    /// Raw log text
    pub message: String,

    /// Ingestion time, milliseconds since the epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingestion_time: Option<i64>,

    /// Source-assigned event id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

impl FilteredLogEvent {
    /// Map to the domain event. Stream name, ingestion time, and event id
    /// are wire detail the pipeline does not use.
    pub fn into_event(self) -> LogEvent {
        LogEvent::new(self.timestamp, self.message)
    }
}

/// Search status of one stream
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchedLogStream {
    /// Stream name
    pub log_stream_name: String,

    /// Whether the stream was fully scanned within the query window
    #[serde(default)]
    pub searched_completely: bool,
}

/// Error body returned by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Error discriminator, e.g. "InvalidParameterException"
    #[serde(rename = "__type", default)]
    pub error_type: String,

    /// Human-readable message
    #[serde(default, alias = "Message")]
    pub message: String,
}
