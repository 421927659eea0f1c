//! rqsift Core - Event types, the log source trait, and the sifting pipeline
//!
//! This crate provides the foundational types and algorithms for rqsift:
//!
//! - **Event**: log events and request identifier extraction
//! - **Query**: immutable retrieval parameters
//! - **Source**: the `LogSource` trait a backend implements
//! - **Retrieve**: exhaustive paginated retrieval with a stable time order
//! - **Correlate**: the filter that keeps whole requests, not single lines

pub mod correlate;
pub mod event;
pub mod query;
pub mod retrieve;
pub mod source;

// Re-export commonly used types
pub use correlate::{correlate, ContentPattern, PatternError};
pub use event::{LogEvent, RequestId};
pub use query::QueryParameters;
pub use retrieve::{Retrieval, Retriever};
pub use source::{EventPage, LogSource, SearchedStream, SourceError, SourceResult};
