//! Error types for taginfo.
//!
//! Every failure is reported per call through [`Error`]; nothing in the
//! library panics or aborts the process.

use thiserror::Error;

/// Failure reported by the HTTP transport. Carried through to the caller
/// unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, TLS or timeout failure.
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// The service answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not valid JSON.
    #[error("invalid JSON from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Top-level error type for the taginfo client.
#[derive(Error, Debug)]
pub enum Error {
    /// Network or parse failure from the transport. Never cached.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered successfully but the body has no `data` array.
    #[error("malformed response from {url}: missing `data` array")]
    MalformedResponse { url: String },

    /// The call was coalesced away by the debouncer and will never run.
    #[error("request to {url} was superseded by a later debounced call")]
    Superseded { url: String },

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The HTTP client could not be built (TLS backend, bad user agent).
    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the call was dropped by the debouncer. UI callers usually
    /// ignore these silently.
    pub fn is_superseded(&self) -> bool {
        matches!(self, Error::Superseded { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
