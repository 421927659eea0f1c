//! HTTP client for FilterLogEvents endpoints
//!
//! Speaks the x-amz-json-1.1 flavor of the protocol: a POST to the endpoint
//! root with the action named in the `X-Amz-Target` header.

use crate::config::CwlConfig;
use crate::error::{CwlError, CwlResult};
use crate::types::{ApiErrorBody, FilterLogEventsRequest, FilterLogEventsResponse};
use reqwest::{Client, StatusCode};
use tracing::{debug, error};

/// Target header value for the FilterLogEvents action
const FILTER_LOG_EVENTS_TARGET: &str = "Logs_20140328.FilterLogEvents";

/// Content type of the x-amz-json protocol
const AMZ_JSON: &str = "application/x-amz-json-1.1";

/// HTTP client for a CloudWatch-style logs endpoint
pub struct CwlClient {
    client: Client,
    endpoint: String,
    auth_token: Option<String>,
    api_key: Option<String>,
}

impl CwlClient {
    /// Create a new client from connector settings
    pub fn new(config: &CwlConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(format!("rqsift/{}", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch one page of events
    pub async fn filter_log_events(
        &self,
        request: &FilterLogEventsRequest,
    ) -> CwlResult<FilterLogEventsResponse> {
        debug!("Requesting events from group {}", request.log_group_name);

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header("X-Amz-Target", FILTER_LOG_EVENTS_TARGET)
            .header("Content-Type", AMZ_JSON)
            .json(request);

        if let Some(token) = &self.auth_token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(key) = &self.api_key {
            builder = builder.header("X-API-Key", key);
        }

        let response = builder.send().await?;
        self.handle_response(response).await
    }

    /// Generic response handler
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> CwlResult<T> {
        let status = response.status();

        match status {
            StatusCode::OK => {
                let body = response.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let body = self.parse_error(response).await;
                error!("Authentication failed: {}", body.message);
                Err(CwlError::Auth {
                    status: status.as_u16(),
                    message: body.message,
                })
            }
            StatusCode::BAD_REQUEST => {
                let body = self.parse_error(response).await;
                Err(CwlError::Rejected {
                    status: status.as_u16(),
                    code: body.error_type,
                    message: body.message,
                })
            }
            _ if status.is_server_error() => {
                let body = self.parse_error(response).await;
                error!("Server error {}: {}", status, body.message);
                Err(CwlError::server(status.as_u16(), body.message))
            }
            _ => {
                let body = self.parse_error(response).await;
                Err(CwlError::server(status.as_u16(), body.message))
            }
        }
    }

    async fn parse_error(&self, response: reqwest::Response) -> ApiErrorBody {
        response
            .json::<ApiErrorBody>()
            .await
            .unwrap_or_else(|_| ApiErrorBody {
                error_type: "unknown".to_string(),
                message: "Unknown error".to_string(),
            })
    }
}
