//! `LogSource` backed by the FilterLogEvents API

use crate::client::CwlClient;
use crate::config::CwlConfig;
use crate::error::{CwlError, CwlResult};
use crate::types::FilterLogEventsRequest;
use async_trait::async_trait;
use rqsift_core::{
    EventPage, LogSource, QueryParameters, SearchedStream, SourceError, SourceResult,
};

/// Log source speaking the FilterLogEvents JSON protocol
pub struct CwlSource {
    client: CwlClient,
}

impl CwlSource {
    /// Validate `config` and build a source from it.
    pub fn new(config: &CwlConfig) -> CwlResult<Self> {
        config.validate()?;
        Ok(Self {
            client: CwlClient::new(config),
        })
    }

    /// Build a source around an existing client.
    pub fn with_client(client: CwlClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LogSource for CwlSource {
    async fn fetch_page(
        &self,
        params: &QueryParameters,
        token: Option<&str>,
    ) -> SourceResult<EventPage> {
        let request = FilterLogEventsRequest::from_query(params, token);
        let response = self
            .client
            .filter_log_events(&request)
            .await
            .map_err(into_source_error)?;

        let events = response
            .events
            .into_iter()
            .map(|e| e.into_event())
            .collect();
        let searched_streams = response
            .searched_log_streams
            .into_iter()
            .map(|s| SearchedStream {
                name: s.log_stream_name,
                searched_completely: s.searched_completely,
            })
            .collect();

        Ok(EventPage {
            events,
            next_token: response.next_token,
            searched_streams,
        })
    }
}

// Connector errors stay inside this crate; the pipeline seam only sees
// `SourceError`.
fn into_source_error(err: CwlError) -> SourceError {
    match err {
        CwlError::Network(e) => SourceError::Transport(e.to_string()),
        CwlError::Serialization(e) => SourceError::Decode(e.to_string()),
        CwlError::Auth { status, message } => SourceError::Rejected { status, message },
        CwlError::Rejected {
            status,
            code,
            message,
        } => SourceError::Rejected {
            status,
            message: format!("{}: {}", code, message),
        },
        CwlError::Server { status, message } => SourceError::Rejected { status, message },
        CwlError::Config(message) => SourceError::Other(anyhow::anyhow!(message)),
    }
}
