//! Query string decomposition and canonical re-encoding.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::echo::split::split;

/// Split a raw query string into a name → value mapping.
///
/// Segments are separated by `&` and split on their first `=`. Values are kept
/// exactly as they appear in the query. A segment without `=` lands under the
/// empty key with an empty value, and a repeated key keeps its last value.
pub fn decompose(query: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();

    if query.is_empty() {
        return params;
    }

    for segment in query.split('&') {
        let (key, value) = split(segment, "=");
        params.insert(key.to_string(), value.to_string());
    }

    params
}

/// Parse `query` as form data and re-encode it with pairs sorted by key.
///
/// Pairs sharing a key keep their relative order. The result is not
/// necessarily byte-identical to the input: escapes are normalized and `+`
/// is used for spaces.
pub fn canonicalize(query: &str) -> String {
    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
