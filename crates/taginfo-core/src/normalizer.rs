//! Normalizer: turns caller [`Params`] into the [`WireQuery`] sent to taginfo.
//!
//! Derivation runs first (it reads `geometry`), sanitizing runs last (it
//! drops `geometry` and `debounce`). None of these steps can fail; fields
//! they do not recognise are left alone.

use crate::types::{Params, WireQuery};

/// Fill `filter` from `geometry` (`point|vertex → nodes`, `area|line → ways`)
/// unless the caller already set one.
pub fn derive_filter(mut params: Params) -> Params {
    if params.filter.is_none() {
        if let Some(filter) = params.geometry.and_then(|g| g.filter()) {
            params.filter = Some(filter.to_string());
        }
    }
    params
}

/// Fill `sortname` from `geometry` (`count_nodes` or `count_ways`) unless the
/// caller already set one.
pub fn derive_sort(mut params: Params) -> Params {
    if params.sortname.is_none() {
        if let Some(sort) = params.geometry.and_then(|g| g.sort()) {
            params.sortname = Some(sort.to_string());
        }
    }
    params
}

/// Flatten `params` into the wire mapping, dropping the UI-only
/// `geometry` and `debounce` options wherever they were set.
pub fn sanitize(params: &Params) -> WireQuery {
    let params = params.clone().absorb_extra();
    let mut wire = params.extra.clone();

    let named = [
        ("key", &params.key),
        ("value", &params.value),
        ("rtype", &params.rtype),
        ("query", &params.query),
        ("filter", &params.filter),
        ("sortname", &params.sortname),
        ("sortorder", &params.sortorder),
    ];
    for (name, value) in named {
        if let Some(value) = value {
            wire.insert(name.to_string(), value.clone());
        }
    }
    if let Some(rp) = params.rp {
        wire.insert("rp".to_string(), rp.to_string());
    }
    if let Some(page) = params.page {
        wire.insert("page".to_string(), page.to_string());
    }

    wire
}

/// Overlay `query` on top of endpoint `defaults`; caller values win.
pub fn with_defaults(defaults: &[(&str, &str)], query: WireQuery) -> WireQuery {
    let mut merged: WireQuery = defaults
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    merged.extend(query);
    merged
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
