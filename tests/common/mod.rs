//! Shared test utilities for taginfo integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Debounce timing tests are deterministic with
//! `tokio::time::pause()`; anything that talks to [`FakeTaginfoApi`] runs on
//! real time.

#![allow(dead_code)]

pub mod assertions;
pub mod fake_taginfo_api;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fake_taginfo_api::FakeTaginfoApi;
pub use fixtures::*;
