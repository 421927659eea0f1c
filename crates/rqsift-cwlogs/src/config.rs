//! Connector settings for the CloudWatch-style log source

use crate::error::{CwlError, CwlResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for a FilterLogEvents endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CwlConfig {
    /// Endpoint the FilterLogEvents action is posted to. A regional logs
    /// URL behind a credentialed gateway, or a local emulator.
    pub endpoint: String,

    /// Bearer token presented as gateway credentials.
    pub auth_token: Option<String>,

    /// API key presented as gateway credentials.
    pub api_key: Option<String>,

    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for CwlConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:4566".to_string(),
            auth_token: None,
            api_key: None,
            timeout_ms: 30000,
        }
    }
}

impl CwlConfig {
    /// Apply environment variable overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("RQSIFT_ENDPOINT") {
            self.endpoint = val;
        }
        if let Ok(val) = std::env::var("RQSIFT_AUTH_TOKEN") {
            self.auth_token = Some(val);
        }
        if let Ok(val) = std::env::var("RQSIFT_API_KEY") {
            self.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("RQSIFT_TIMEOUT_MS") {
            if let Ok(ms) = val.parse() {
                self.timeout_ms = ms;
            }
        }
    }

    /// Validate settings before a client is built from them.
    pub fn validate(&self) -> CwlResult<()> {
        if self.endpoint.is_empty() {
            return Err(CwlError::Config("endpoint must not be empty".to_string()));
        }
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(CwlError::Config(format!(
                "endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        if self.timeout_ms == 0 {
            return Err(CwlError::Config(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CwlConfig::default();
        assert_eq!(config.endpoint, "http://localhost:4566");
        assert!(config.auth_token.is_none());
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_ms, 30000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_helper() {
        let config = CwlConfig {
            timeout_ms: 1500,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_millis(1500));
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let config = CwlConfig {
            endpoint: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let config = CwlConfig {
            endpoint: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = CwlConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserializes_with_partial_table() {
        let config: CwlConfig = toml::from_str("endpoint = \"https://logs.example.com\"").unwrap();
        assert_eq!(config.endpoint, "https://logs.example.com");
        assert_eq!(config.timeout_ms, 30000);
    }
}
