//! Canned taginfo response bodies used across harnesses.
//!
//! Shapes follow the live API (`https://taginfo.openstreetmap.org/api/4/`):
//! counts arrive as JSON numbers, `in_wiki` as a boolean, and every body is
//! wrapped in a `{ "data": [...] }` envelope.

use serde_json::{json, Value};

/// `keys/all`: a mix of plain, namespaced, rare and documented keys.
pub fn keys_all() -> Value {
    json!({
        "page": 1,
        "rp": 10,
        "total": 6,
        "data": [
            { "key": "addr:street", "count_all": 120000000, "count_nodes": 90000000, "count_ways": 30000000, "in_wiki": true },
            { "key": "building",    "count_all": 500000000, "count_nodes": 1000000,  "count_ways": 499000000, "in_wiki": true },
            { "key": "highway",     "count_all": 250000000, "count_nodes": 40000000, "count_ways": 210000000, "in_wiki": true },
            { "key": "name:xx-foo", "count_all": 3,         "count_nodes": 3,        "count_ways": 0,         "in_wiki": false },
            { "key": "fixme_tmp",   "count_all": 100,       "count_nodes": 100,      "count_ways": 0,         "in_wiki": true },
            { "key": "a:b:c",       "count_all": 90000,     "count_nodes": 90000,    "count_ways": 0,         "in_wiki": false }
        ]
    })
}

/// `key/values?key=highway`.
pub fn highway_values() -> Value {
    json!({
        "page": 1,
        "rp": 25,
        "total": 6,
        "data": [
            { "value": "residential",  "count": 60000000, "fraction": 0.26, "in_wiki": true, "description": "Roads which serve as an access to housing" },
            { "value": "service",      "count": 55000000, "fraction": 0.24, "in_wiki": true, "description": "" },
            { "value": "track",        "count": 25000000, "fraction": 0.11, "in_wiki": true },
            { "value": "primary;secondary", "count": 900, "fraction": 0.0,  "in_wiki": false },
            { "value": "Residential",  "count": 1200,     "fraction": 0.0,  "in_wiki": false },
            { "value": "bogus",        "count": 2,        "fraction": 0.0,  "in_wiki": false }
        ]
    })
}

/// `key/values?key=network`, where uppercase codes are expected.
pub fn network_values() -> Value {
    json!({
        "data": [
            { "value": "NCN", "fraction": 0.3, "in_wiki": true, "description": "National Cycle Network" },
            { "value": "lcn", "fraction": 0.2, "in_wiki": true }
        ]
    })
}

/// `*/wiki_pages`: returned to the caller untouched.
pub fn wiki_pages() -> Value {
    json!({
        "data": [
            { "lang": "en", "title": "Key:landuse", "description": "Primary use of land", "on_node": true, "on_way": true },
            { "lang": "de", "title": "DE:Key:landuse", "description": "Landnutzung", "on_node": true, "on_way": true }
        ]
    })
}
