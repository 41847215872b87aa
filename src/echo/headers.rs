//! Header flattening.

use std::collections::BTreeMap;

use axum::http::HeaderMap;

/// Collapse a multi-valued header map into one value per name.
///
/// The last value recorded for a name wins. Names are rendered in canonical
/// MIME form (`x-forwarded-for` becomes `X-Forwarded-For`).
pub fn flatten(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut flat = BTreeMap::new();

    for name in headers.keys() {
        if let Some(value) = headers.get_all(name).iter().last() {
            flat.insert(
                canonical_name(name.as_str()),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
    }

    flat
}

/// Upper-case the first letter of each `-` separated word, lower-case the rest.
pub fn canonical_name(name: &str) -> String {
    let mut canonical = String::with_capacity(name.len());
    let mut upper = true;

    for c in name.chars() {
        canonical.push(if upper {
            c.to_ascii_uppercase()
        } else {
            c.to_ascii_lowercase()
        });
        upper = c == '-';
    }

    canonical
}
