//! Pretty JSON rendering for every document the service returns.

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::echo::error::EchoError;

/// Media type declared on every serialized document.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Render `document` as JSON indented by two spaces.
pub fn to_pretty_json<T: Serialize>(document: &T) -> Result<String, EchoError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// A document answered as `200 OK` pretty JSON.
///
/// Serialization failures become a 500 instead of an empty body.
pub struct JsonDocument<T>(pub T);

impl<T: Serialize> IntoResponse for JsonDocument<T> {
    fn into_response(self) -> Response {
        match to_pretty_json(&self.0) {
            Ok(text) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                text,
            )
                .into_response(),
            Err(e) => e.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::echo::reply::EchoReply;
    use axum::http::StatusCode;
    use std::collections::BTreeMap;

    fn sample_reply() -> EchoReply {
        EchoReply {
            method: "GET".into(),
            protocol: "HTTP/1.1".into(),
            host: "example.com".into(),
            port: "9090".into(),
            uri: "/foo?a=1".into(),
            path: "/foo".into(),
            query: "a=1".into(),
            body: "-".into(),
            headers: BTreeMap::from([("Accept".to_string(), "*/*".to_string())]),
            params: BTreeMap::from([("a".to_string(), "1".to_string())]),
        }
    }

    #[test]
    fn test_pretty_json_parses_back() {
        let reply = sample_reply();
        let text = to_pretty_json(&reply).unwrap();

        assert!(text.contains("\n  \"method\": \"GET\""));
        let parsed: EchoReply = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, reply);
    }

    #[test]
    fn test_pretty_json_is_deterministic() {
        let reply = sample_reply();
        assert_eq!(to_pretty_json(&reply).unwrap(), to_pretty_json(&reply.clone()).unwrap());
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refused"))
        }
    }

    #[test]
    fn test_json_document_content_type() {
        let response = JsonDocument(sample_reply()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
    }

    #[test]
    fn test_json_document_failure_is_500() {
        let response = JsonDocument(Unserializable).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
