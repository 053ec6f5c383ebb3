//! taginfo: cached, debounced client for the OpenStreetMap taginfo API.
//!
//! This crate re-exports the two workspace crates so that integration tests
//! and the CLI can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! Params ──► normalizer ──► cache ──► debouncer ──► transport
//!                             │
//!                             └──► filters ──► Vec<Suggestion>
//! ```
//!
//! Pure logic lives in `taginfo-core`; everything that awaits lives in
//! `taginfo-client`.

pub use taginfo_client::{Debouncer, HttpTransport, TagInfo, Transport};
pub use taginfo_core::{
    cache, config, filters, normalizer, CacheStats, Error, Geometry, Params, RawRecord,
    Result, Suggestion, TransportError, WireQuery,
};
