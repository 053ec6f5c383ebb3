//! The taginfo endpoint façade.
//!
//! Every operation runs the same pipeline:
//!
//! 1. derive `filter` / `sortname` defaults from `geometry`
//! 2. sanitize and overlay the caller's options on the endpoint defaults
//! 3. fetch through the cache (and the debouncer when `debounce` is set)
//! 4. run the endpoint's filter over the response `data` array
//!
//! One `TagInfo` owns one cache and one base URL. Share it (`&TagInfo` or
//! `Arc<TagInfo>`) to share both.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::Duration;

use serde_json::Value;
use taginfo_core::cache::{CacheStats, ResponseCache};
use taginfo_core::config::{ClientConfig, DEFAULT_ENDPOINT};
use taginfo_core::normalizer::{derive_filter, derive_sort, sanitize, with_defaults};
use taginfo_core::{filters, Error, Params, Result, Suggestion, WireQuery};

use crate::debounce::{Debouncer, DEFAULT_WINDOW};
use crate::http::HttpTransport;
use crate::Transport;

const KEYS_PATH: &str = "keys/all";
const VALUES_PATH: &str = "key/values";
const KEY_DOCS_PATH: &str = "key/wiki_pages";
const TAG_DOCS_PATH: &str = "tag/wiki_pages";
const RELATION_DOCS_PATH: &str = "relation/wiki_pages";

const KEYS_DEFAULTS: &[(&str, &str)] = &[
    ("rp", "10"),
    ("sortname", "count_all"),
    ("sortorder", "desc"),
    ("page", "1"),
];

const MULTIKEYS_DEFAULTS: &[(&str, &str)] = &[
    ("rp", "25"),
    ("sortname", "count_all"),
    ("sortorder", "desc"),
    ("page", "1"),
];

const VALUES_DEFAULTS: &[(&str, &str)] = MULTIKEYS_DEFAULTS;

pub struct TagInfo {
    endpoint: RwLock<String>,
    cache: Mutex<ResponseCache>,
    transport: Arc<dyn Transport>,
    debouncer: Debouncer,
}

impl TagInfo {
    /// Client against the public service with the default debounce window.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_window(transport, DEFAULT_WINDOW)
    }

    pub fn with_window(transport: Arc<dyn Transport>, window: Duration) -> Self {
        Self {
            endpoint: RwLock::new(DEFAULT_ENDPOINT.to_string()),
            cache: Mutex::new(ResponseCache::new()),
            debouncer: Debouncer::new(window, transport.clone()),
            transport,
        }
    }

    /// Client backed by [`HttpTransport`], configured from `[client]`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::from_config(config)?);
        let client = Self::with_window(transport, config.debounce_window());
        client.set_endpoint(config.endpoint.clone());
        Ok(client)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Current base URL, including the trailing slash.
    pub fn endpoint(&self) -> String {
        self.endpoint
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Point subsequent requests at a different base URL.
    pub fn set_endpoint(&self, endpoint: impl Into<String>) -> &Self {
        *self.endpoint.write().unwrap_or_else(PoisonError::into_inner) = endpoint.into();
        self
    }

    /// Forget every cached response.
    pub fn reset(&self) -> &Self {
        self.cache().reset();
        tracing::debug!("cache reset");
        self
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache().stats()
    }

    // -----------------------------------------------------------------------
    // Endpoint operations
    // -----------------------------------------------------------------------

    /// Popular or documented keys, plain keys before namespaced ones.
    ///
    /// `params.filter` (`nodes`, `ways`, `relations`) picks which usage count
    /// decides popularity.
    pub async fn keys(&self, params: Params) -> Result<Vec<Suggestion>> {
        let params = params.absorb_extra();
        let debounce = params.debounce;
        let params = derive_sort(params);
        let url = self.url(KEYS_PATH, &with_defaults(KEYS_DEFAULTS, sanitize(&params)));

        let body = self.fetch(&url, debounce).await?;
        Ok(filters::filter_keys(data(&body, &url)?, params.filter.as_deref()))
    }

    /// Keys with exactly one namespace separator, in service order.
    pub async fn multikeys(&self, params: Params) -> Result<Vec<Suggestion>> {
        let params = params.absorb_extra();
        let debounce = params.debounce;
        let params = derive_sort(params);
        let url = self.url(KEYS_PATH, &with_defaults(MULTIKEYS_DEFAULTS, sanitize(&params)));

        let body = self.fetch(&url, debounce).await?;
        Ok(filters::filter_multikeys(data(&body, &url)?))
    }

    /// Relevant values for `params.key`.
    pub async fn values(&self, params: Params) -> Result<Vec<Suggestion>> {
        let params = params.absorb_extra();
        let debounce = params.debounce;
        let params = derive_sort(derive_filter(params));
        let url = self.url(VALUES_PATH, &with_defaults(VALUES_DEFAULTS, sanitize(&params)));

        let body = self.fetch(&url, debounce).await?;
        let allow_upper_case = filters::allows_upper_case(params.key.as_deref());
        Ok(filters::filter_values(data(&body, &url)?, allow_upper_case))
    }

    /// Raw wiki page records for a tag, a relation type or a key.
    pub async fn docs(&self, params: Params) -> Result<Vec<Value>> {
        let params = params.absorb_extra();
        let debounce = params.debounce;
        let params = derive_sort(params);
        let path = if params.value.is_some() {
            TAG_DOCS_PATH
        } else if params.rtype.is_some() {
            RELATION_DOCS_PATH
        } else {
            KEY_DOCS_PATH
        };
        let url = self.url(path, &sanitize(&params));

        let body = self.fetch(&url, debounce).await?;
        Ok(data(&body, &url)?.to_vec())
    }

    // -----------------------------------------------------------------------
    // Request pipeline
    // -----------------------------------------------------------------------

    /// Fetch `url`, answering from the cache when possible.
    ///
    /// Successful bodies are cached before they are returned; failures are
    /// not cached.
    pub async fn fetch(&self, url: &str, debounce: bool) -> Result<Value> {
        let cached = self.cache().get(url).cloned();
        if let Some(body) = cached {
            tracing::debug!(url, "cache hit");
            return Ok(body);
        }
        tracing::debug!(url, debounce, "cache miss");

        let result = if debounce {
            self.debouncer.call(url).await
        } else {
            self.transport.fetch_json(url).await.map_err(Error::from)
        };

        match result {
            Ok(body) => {
                self.cache().insert(url, body.clone());
                Ok(body)
            }
            Err(e) => {
                if !e.is_superseded() {
                    tracing::warn!(url, error = %e, "taginfo request failed");
                }
                Err(e)
            }
        }
    }

    /// `base + path + '?' + encoded query`.
    pub fn url(&self, path: &str, query: &WireQuery) -> String {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query.iter())
            .finish();
        format!("{}{}?{}", self.endpoint(), path, encoded)
    }

    fn cache(&self) -> MutexGuard<'_, ResponseCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The `data` array of a response envelope.
fn data<'a>(body: &'a Value, url: &str) -> Result<&'a [Value]> {
    match body.get("data").and_then(Value::as_array) {
        Some(data) => Ok(data),
        None => {
            tracing::warn!(url, "response has no data array");
            Err(Error::MalformedResponse {
                url: url.to_string(),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
