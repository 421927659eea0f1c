//! Exhaustive paginated retrieval
//!
//! Walks a log source page by page until the continuation token runs out,
//! then puts the accumulated window into a stable timestamp order.

use crate::event::LogEvent;
use crate::query::QueryParameters;
use crate::source::{LogSource, SearchedStream, SourceResult};
use tracing::debug;

/// Everything one retrieval produced: the ordered event window plus the
/// per-stream search status reported with the terminating page.
#[derive(Debug, Clone)]
pub struct Retrieval {
    /// All events of the window, sorted by timestamp ascending. The sort is
    /// stable: events with equal timestamps keep their accumulation order.
    pub events: Vec<LogEvent>,

    /// Search status from the terminating response. Diagnostic only.
    pub searched_streams: Vec<SearchedStream>,
}

/// Drives a `LogSource` to exhaustion for one query.
pub struct Retriever<S: LogSource> {
    source: S,
}

impl<S: LogSource> Retriever<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch every page for `params` and return the sorted window.
    ///
    /// Any page failure aborts the whole retrieval: no partial window is
    /// ever returned, and no retry happens at this layer.
    pub async fn retrieve(&self, params: &QueryParameters) -> SourceResult<Retrieval> {
        let mut events: Vec<LogEvent> = Vec::new();
        let mut searched_streams: Vec<SearchedStream> = Vec::new();
        let mut token: Option<String> = None;
        let mut pages = 0u32;

        loop {
            let page = self.source.fetch_page(params, token.as_deref()).await?;
            pages += 1;
            debug!("Fetched page {} with {} events", pages, page.events.len());

            events.extend(page.events);
            // The protocol reports the cumulative stream status on every
            // response; the terminating one is authoritative.
            searched_streams = page.searched_streams;

            match page.next_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }

        debug!("Retrieved {} events across {} pages", events.len(), pages);
        for stream in &searched_streams {
            debug!(
                "Searched stream {} (completely: {})",
                stream.name, stream.searched_completely
            );
        }

        events.sort_by_key(|e| e.timestamp);

        Ok(Retrieval {
            events,
            searched_streams,
        })
    }
}
