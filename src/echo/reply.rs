//! The reflected-request document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Port reported when the Host header carries none.
pub const DEFAULT_PORT: &str = "80 (defaulted)";

/// Body reported when the request has no body.
pub const EMPTY_BODY: &str = "-";

/// Canonical description of one inbound request.
///
/// Maps are ordered so the serialized document is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoReply {
    pub method: String,
    pub protocol: String,
    pub host: String,
    /// Never empty: falls back to [`DEFAULT_PORT`].
    pub port: String,
    /// Request-URI exactly as received.
    pub uri: String,
    /// Percent-decoded path.
    pub path: String,
    /// Canonical re-encoding of the query.
    pub query: String,
    /// Body as text, or [`EMPTY_BODY`].
    pub body: String,
    pub headers: BTreeMap<String, String>,
    pub params: BTreeMap<String, String>,
}
