//! Shared utility functions for code generation.

use indexmap::IndexSet;

/// Replace every character that isn't an ASCII letter, ASCII digit or `_`
/// with `_` (e.g., "data/v1.json" -> "data_v1_json").
///
/// The result has exactly as many characters as the input. Leading digits
/// are kept, so the result is not guaranteed to be a legal identifier in
/// every language.
pub fn sanitize_identifier(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Remove exact duplicates, keeping the first occurrence of each item in its
/// original position.
pub fn dedup_preserving_order<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items
        .into_iter()
        .map(Into::into)
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}
