//! taginfo-client: async access to the taginfo API.
//!
//! [`TagInfo`] is the façade UI code talks to. It sends requests through a
//! [`Transport`] (the reqwest-backed [`HttpTransport`] in production),
//! memoizes bodies by URL, and optionally coalesces bursts of calls through
//! the shared [`Debouncer`].

pub mod client;
pub mod debounce;
pub mod http;

pub use client::TagInfo;
pub use debounce::Debouncer;
pub use http::HttpTransport;
pub use taginfo_core::{Error, Geometry, Params, Result, Suggestion, TransportError};

use async_trait::async_trait;

/// Fetches a URL and parses the body as JSON.
///
/// Implementations own timeouts and connection handling; the client never
/// retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, TransportError>;
}
