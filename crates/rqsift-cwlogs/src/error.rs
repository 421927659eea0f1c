//! Error types for the rqsift-cwlogs crate

use thiserror::Error;

/// Errors that can occur while talking to a CloudWatch-style endpoint
#[derive(Debug, Error)]
pub enum CwlError {
    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Authentication failed
    #[error("Authentication failed (status {status}): {message}")]
    Auth { status: u16, message: String },

    /// The service refused the query parameters
    #[error("Query rejected ({code}): {message}")]
    Rejected {
        status: u16,
        code: String,
        message: String,
    },

    /// Server error
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CwlError {
    /// Create a server error from status and message
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        CwlError::Server {
            status,
            message: message.into(),
        }
    }
}

/// Result type for connector operations
pub type CwlResult<T> = Result<T, CwlError>;
