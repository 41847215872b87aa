//! `key<sep>value` splitting.
//!
//! Shared by Host header parsing (`host:port`) and environment decomposition
//! (`KEY=VALUE`).

/// Split `text` around the first occurrence of `separator`.
///
/// Returns `("", "")` when the separator does not occur. Callers that need
/// the original text on a miss must apply their own fallback.
pub fn split<'a>(text: &'a str, separator: &str) -> (&'a str, &'a str) {
    match text.find(separator) {
        Some(index) => (&text[..index], &text[index + separator.len()..]),
        None => ("", ""),
    }
}
