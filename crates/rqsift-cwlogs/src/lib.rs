//! rqsift-cwlogs - CloudWatch-style log source
//!
//! HTTP connector for endpoints speaking the FilterLogEvents JSON protocol,
//! implementing the `LogSource` trait from rqsift-core.
//!
//! ## Features
//!
//! - **FilterLogEvents protocol** - x-amz-json-1.1 requests with continuation tokens
//! - **Gateway credentials** - bearer token or API key headers
//! - **Typed failures** - transport, rejection, and decode errors kept apart
//!
//! ## Quick Start
//!
//! ```no_run
//! use rqsift_core::{QueryParameters, Retriever};
//! use rqsift_cwlogs::{CwlConfig, CwlSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CwlConfig {
//!         endpoint: "http://localhost:4566".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let source = CwlSource::new(&config)?;
//!     let params = QueryParameters::new("/app/prod").with_limit(1000);
//!     let retrieval = Retriever::new(source).retrieve(&params).await?;
//!     println!("{} events", retrieval.events.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod source;
pub mod types;

// Re-exports for convenience
pub use client::CwlClient;
pub use config::CwlConfig;
pub use error::{CwlError, CwlResult};
pub use source::CwlSource;
pub use types::{
    FilterLogEventsRequest, FilterLogEventsResponse, FilteredLogEvent, SearchedLogStream,
};
