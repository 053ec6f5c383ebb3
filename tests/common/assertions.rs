//! Domain-specific assertion macros for taginfo harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* suggestion list invariant was violated.

use taginfo::Suggestion;

// ---------------------------------------------------------------------------
// Suggestion list assertions
// ---------------------------------------------------------------------------

/// Assert that a suggestion list has exactly these values, in this order.
///
/// ```rust
/// assert_values!(suggestions, ["highway", "addr:street"]);
/// ```
#[macro_export]
macro_rules! assert_values {
    ($suggestions:expr, [$($value:expr),* $(,)?]) => {{
        let suggestions: &[taginfo::Suggestion] = &$suggestions;
        let actual: Vec<&str> = suggestions.iter().map(|s| s.value.as_str()).collect();
        let expected: Vec<&str> = vec![$($value),*];
        pretty_assertions::assert_eq!(actual, expected, "suggestion values differ");
    }};
}

/// Assert that a suggestion list does not offer `value`.
#[macro_export]
macro_rules! assert_not_suggested {
    ($suggestions:expr, $value:expr) => {{
        let suggestions: &[taginfo::Suggestion] = &$suggestions;
        let value: &str = $value;
        if let Some(hit) = suggestions.iter().find(|s| s.value == value) {
            panic!(
                "assert_not_suggested! failed: {:?} was suggested as {:?}.\n  All values: {:?}",
                value,
                hit,
                suggestions.iter().map(|s| &s.value).collect::<Vec<_>>()
            );
        }
    }};
}

/// Assert that every suggestion in a list satisfies a predicate.
///
/// ```rust
/// assert_suggestions_all!(suggestions, |s| !s.value.contains(','));
/// ```
#[macro_export]
macro_rules! assert_suggestions_all {
    ($suggestions:expr, $pred:expr) => {{
        let suggestions: &[taginfo::Suggestion] = &$suggestions;
        let pred = $pred;
        let failing: Vec<_> = suggestions.iter().filter(|s| !pred(s)).collect();
        if !failing.is_empty() {
            panic!(
                "assert_suggestions_all! failed: {} of {} suggestions did not satisfy predicate: {:?}",
                failing.len(),
                suggestions.len(),
                failing
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Look up the title shown for `value`.
pub fn title_of<'a>(suggestions: &'a [Suggestion], value: &str) -> Option<&'a str> {
    suggestions
        .iter()
        .find(|s| s.value == value)
        .map(|s| s.title.as_str())
}
