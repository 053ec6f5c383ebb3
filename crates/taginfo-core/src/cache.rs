//! Cache: response bodies keyed by their exact request URL.
//!
//! The cache is the single source of truth for anything already fetched: a
//! URL present here is never requested again until [`ResponseCache::reset`].
//! Entries are never evicted on their own.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

/// A cached response body and when it arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub body: Value,
    pub fetched_at: DateTime<Utc>,
}

/// Hit/miss counters since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `url`, counting the hit or miss.
    pub fn get(&mut self, url: &str) -> Option<&Value> {
        match self.entries.get(url) {
            Some(entry) => {
                self.hits += 1;
                Some(&entry.body)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn entry(&self, url: &str) -> Option<&CacheEntry> {
        self.entries.get(url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Store a successfully received body, replacing any previous one.
    pub fn insert(&mut self, url: impl Into<String>, body: Value) {
        self.entries.insert(
            url.into(),
            CacheEntry {
                body,
                fetched_at: Utc::now(),
            },
        );
    }

    /// Drop every entry and zero the counters. Safe to call at any time.
    pub fn reset(&mut self) {
        self.entries = HashMap::new();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
