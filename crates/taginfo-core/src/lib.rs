//! taginfo-core: pure logic behind the taginfo client.
//!
//! This crate exposes the request pipeline stages as public modules, plus
//! the shared types used across all of them. Nothing here performs network
//! I/O; that lives in `taginfo-client`.
//!
//! # Pipeline
//!
//! ```text
//! Params ──► normalizer ──► URL ──► cache ──(miss)──► transport
//!                                     │                   │
//!                                     ◄───────────────────┘
//!                                     │
//!                                     └──► filters ──► Vec<Suggestion>
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod filters;
pub mod normalizer;
pub mod types;

pub use cache::{CacheStats, ResponseCache};
pub use error::{Error, Result, TransportError};
pub use types::{Geometry, Params, RawRecord, Suggestion, WireQuery};
