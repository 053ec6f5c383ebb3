//! Core types for taginfo-core.
//!
//! This module defines the data structures shared by the normalizer, the
//! filters and the client façade: the caller-facing [`Params`], the
//! [`Geometry`] hint that drives derived defaults, the opaque [`RawRecord`]
//! returned by the service, and the [`Suggestion`] pair handed to UI code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One item of the service's `data` array. Its shape varies by endpoint.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// The flat `name → value` mapping sent on the wire.
///
/// Ordered so that the same logical request always encodes to the same URL,
/// which is what the response cache keys on.
pub type WireQuery = BTreeMap<String, String>;

/// Geometry of the feature a suggestion list is being built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    Point,
    Vertex,
    Area,
    Line,
    Relation,
}

impl Geometry {
    /// Taginfo `filter` value for this geometry, if it has one.
    pub fn filter(self) -> Option<&'static str> {
        match self {
            Geometry::Point | Geometry::Vertex => Some("nodes"),
            Geometry::Area | Geometry::Line => Some("ways"),
            Geometry::Relation => None,
        }
    }

    /// Taginfo `sortname` value for this geometry, if it has one.
    pub fn sort(self) -> Option<&'static str> {
        match self {
            Geometry::Point | Geometry::Vertex => Some("count_nodes"),
            Geometry::Area | Geometry::Line => Some("count_ways"),
            Geometry::Relation => None,
        }
    }
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Geometry::Point => write!(f, "point"),
            Geometry::Vertex => write!(f, "vertex"),
            Geometry::Area => write!(f, "area"),
            Geometry::Line => write!(f, "line"),
            Geometry::Relation => write!(f, "relation"),
        }
    }
}

impl std::str::FromStr for Geometry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "point" => Ok(Geometry::Point),
            "vertex" => Ok(Geometry::Vertex),
            "area" => Ok(Geometry::Area),
            "line" => Ok(Geometry::Line),
            "relation" => Ok(Geometry::Relation),
            other => Err(format!("unknown geometry {other:?}")),
        }
    }
}

/// Query parameters for one façade call.
///
/// `geometry` and `debounce` are consumed locally and never sent. Everything
/// else, including the `extra` map, is forwarded to the service as-is.
///
/// Names with a dedicated field are never kept in `extra`: [`Params::extra`]
/// stores them in their field, and [`Params::absorb_extra`] does the same for
/// entries written to the map directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    /// Drives the derived `filter` / `sortname` defaults.
    pub geometry: Option<Geometry>,
    pub key: Option<String>,
    pub value: Option<String>,
    pub rtype: Option<String>,
    /// Prefix search term (`query=` on the wire).
    pub query: Option<String>,
    pub filter: Option<String>,
    pub sortname: Option<String>,
    pub sortorder: Option<String>,
    /// Page size.
    pub rp: Option<u32>,
    pub page: Option<u32>,
    /// Any other option, sent verbatim.
    pub extra: BTreeMap<String, String>,
    /// Route the request through the shared debouncer.
    pub debounce: bool,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn rtype(mut self, rtype: impl Into<String>) -> Self {
        self.rtype = Some(rtype.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn sortname(mut self, sortname: impl Into<String>) -> Self {
        self.sortname = Some(sortname.into());
        self
    }

    pub fn sortorder(mut self, sortorder: impl Into<String>) -> Self {
        self.sortorder = Some(sortorder.into());
        self
    }

    pub fn rp(mut self, rp: u32) -> Self {
        self.rp = Some(rp);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set an option by its wire name.
    pub fn extra(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name.into(), value.into());
        self
    }

    /// Move entries of `extra` that name a dedicated field into that field.
    pub fn absorb_extra(mut self) -> Self {
        for (name, value) in std::mem::take(&mut self.extra) {
            self.set(name, value);
        }
        self
    }

    fn set(&mut self, name: String, value: String) {
        match name.as_str() {
            // An unknown geometry maps to nothing, same as no geometry.
            "geometry" => self.geometry = value.parse().ok(),
            "debounce" => self.debounce = matches!(value.as_str(), "true" | "1"),
            "key" => self.key = Some(value),
            "value" => self.value = Some(value),
            "rtype" => self.rtype = Some(value),
            "query" => self.query = Some(value),
            "filter" => self.filter = Some(value),
            "sortname" => self.sortname = Some(value),
            "sortorder" => self.sortorder = Some(value),
            "rp" | "page" => match value.parse() {
                Ok(n) if name == "rp" => self.rp = Some(n),
                Ok(n) => self.page = Some(n),
                Err(_) => {
                    self.extra.insert(name, value);
                }
            },
            _ => {
                self.extra.insert(name, value);
            }
        }
    }

    pub fn debounce(mut self, debounce: bool) -> Self {
        self.debounce = debounce;
        self
    }
}

/// A display pair for autocomplete lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// Machine identifier (the key or value itself).
    pub value: String,
    /// Human label. Equal to `value` when the service has no description.
    pub title: String,
}

impl Suggestion {
    pub fn new(value: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
        }
    }

    /// A suggestion whose title is its own value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            title: value.clone(),
            value,
        }
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.value, self.title)
    }
}
