//! The log source seam
//!
//! Retrieval is written against a capability trait so the pagination loop
//! can be pointed at any backend that serves pages of events with a
//! continuation token, and exercised in tests with scripted sources.

use crate::event::LogEvent;
use crate::query::QueryParameters;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Source error type
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("source returned status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Per-stream search status reported by the source.
///
/// Diagnostic only; never feeds back into retrieval or filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchedStream {
    /// Stream name.
    pub name: String,

    /// Whether the stream was fully scanned within the query window.
    pub searched_completely: bool,
}

/// One page of results from a source.
#[derive(Debug, Clone, Default)]
pub struct EventPage {
    /// Events in source order.
    pub events: Vec<LogEvent>,

    /// Opaque cursor, present when more pages remain.
    pub next_token: Option<String>,

    /// Search status of the streams consulted so far.
    pub searched_streams: Vec<SearchedStream>,
}

/// A remote store of log events, consumed page by page.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Fetch one page for `params`.
    ///
    /// `token` is `None` on the first call and the previous page's
    /// `next_token`, verbatim, on every later call.
    async fn fetch_page(
        &self,
        params: &QueryParameters,
        token: Option<&str>,
    ) -> SourceResult<EventPage>;
}
