//! Filters: decide which taginfo records are relevant enough to suggest.
//!
//! Each endpoint has a predicate and a transform:
//!
//! | Endpoint    | Predicate                                        | Output            |
//! |-------------|--------------------------------------------------|-------------------|
//! | `keys`      | count above [`KEY_COUNT_THRESHOLD`] or in wiki   | `{key, key}`, plain keys first |
//! | `multikeys` | exactly one `:` in the key                       | `{key, key}`      |
//! | `values`    | no `;`/`,`, no uppercase/`*`, used or in wiki    | `{value, description or value}` |
//! | `docs`      | none                                             | raw records       |
//!
//! Numeric fields are read with JavaScript `parseFloat` rules and flags with
//! JavaScript truthiness, because that is how the service's own clients read
//! them. Missing or garbled numbers become NaN and never pass a `>` test.

use serde_json::Value;

use crate::types::{RawRecord, Suggestion};

/// Minimum usage count for a key to be suggested without a wiki page.
pub const KEY_COUNT_THRESHOLD: f64 = 2500.0;

/// Keys whose values are conventionally uppercase (route network codes).
const UPPERCASE_VALUE_KEYS: &[&str] = &["cycle_network", "network"];

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// True when `record` is used often enough, or is documented.
///
/// `type_hint` selects the counter: `count_<type>` when given (`nodes`,
/// `ways`, `relations`), `count_all` otherwise.
pub fn key_passes(record: &RawRecord, type_hint: Option<&str>) -> bool {
    let field = match type_hint {
        Some(t) => format!("count_{t}"),
        None => "count_all".to_string(),
    };
    parse_float(record.get(&field)) > KEY_COUNT_THRESHOLD || truthy(record.get("in_wiki"))
}

/// Relevant keys, plain keys ahead of namespaced (`a:b`) ones.
pub fn filter_keys(data: &[Value], type_hint: Option<&str>) -> Vec<Suggestion> {
    let mut keys: Vec<&str> = records(data)
        .filter(|r| key_passes(r, type_hint))
        .filter_map(|r| str_field(r, "key"))
        .collect();
    // Stable: the service's own ordering survives within each group.
    keys.sort_by_key(|k| k.contains(':'));

    tracing::debug!(kept = keys.len(), total = data.len(), "key filter");
    keys.into_iter().map(Suggestion::plain).collect()
}

// ---------------------------------------------------------------------------
// Multikeys
// ---------------------------------------------------------------------------

/// True when the key has exactly one `:`.
pub fn multikey_passes(record: &RawRecord) -> bool {
    str_field(record, "key").is_some_and(|k| k.matches(':').count() == 1)
}

pub fn filter_multikeys(data: &[Value]) -> Vec<Suggestion> {
    let out: Vec<Suggestion> = records(data)
        .filter(|r| multikey_passes(r))
        .filter_map(|r| str_field(r, "key"))
        .map(Suggestion::plain)
        .collect();

    tracing::debug!(kept = out.len(), total = data.len(), "multikey filter");
    out
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// Whether values of `key` may contain uppercase letters and `*`.
pub fn allows_upper_case(key: Option<&str>) -> bool {
    key.is_some_and(|k| UPPERCASE_VALUE_KEYS.contains(&k))
}

/// True when the value is a clean, used or documented single value.
pub fn value_passes(record: &RawRecord, allow_upper_case: bool) -> bool {
    let Some(value) = str_field(record, "value") else {
        return false;
    };
    // Lists and free text.
    if value.contains([';', ',']) {
        return false;
    }
    if !allow_upper_case && value.chars().any(|c| c.is_ascii_uppercase() || c == '*') {
        return false;
    }
    parse_float(record.get("fraction")) > 0.0 || truthy(record.get("in_wiki"))
}

pub fn filter_values(data: &[Value], allow_upper_case: bool) -> Vec<Suggestion> {
    let out: Vec<Suggestion> = records(data)
        .filter(|r| value_passes(r, allow_upper_case))
        .filter_map(|r| {
            let value = str_field(r, "value")?;
            let title = str_field(r, "description")
                .filter(|d| !d.is_empty())
                .unwrap_or(value);
            Some(Suggestion::new(value, title))
        })
        .collect();

    tracing::debug!(
        kept = out.len(),
        total = data.len(),
        allow_upper_case,
        "value filter"
    );
    out
}

// ---------------------------------------------------------------------------
// Field readers
// ---------------------------------------------------------------------------

fn records(data: &[Value]) -> impl Iterator<Item = &RawRecord> {
    data.iter().filter_map(Value::as_object)
}

fn str_field<'a>(record: &'a RawRecord, name: &str) -> Option<&'a str> {
    record.get(name).and_then(Value::as_str)
}

/// Read a numeric field the way JavaScript `parseFloat` would.
///
/// Numbers are taken as-is, strings by their longest numeric prefix,
/// anything else (including a missing field) is NaN.
pub fn parse_float(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => parse_float_prefix(s),
        _ => f64::NAN,
    }
}

fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// JavaScript truthiness of a JSON field. Missing counts as `null`.
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
