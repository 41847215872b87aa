//! Request reflection: inbound request → [`EchoReply`].

use axum::{
    body::Body,
    http::{header, request::Parts, Request, Version},
};
use percent_encoding::percent_decode_str;

use crate::echo::error::EchoError;
use crate::echo::reply::{EchoReply, DEFAULT_PORT, EMPTY_BODY};
use crate::echo::{headers, query, split::split};

/// Read the whole body of `request` and reflect it.
///
/// `body_limit` caps the number of body bytes read; `None` reads everything
/// the transport delivers. A declared `Content-Length` over the cap is
/// rejected before reading. A body that cannot be read fails this request only.
pub async fn reflect_request(
    request: Request<Body>,
    body_limit: Option<usize>,
) -> Result<EchoReply, EchoError> {
    let (parts, body) = request.into_parts();

    if let (Some(limit), Some(length)) = (body_limit, declared_length(&parts)) {
        if length > limit as u64 {
            return Err(EchoError::BodyTooLarge { length, limit });
        }
    }

    let bytes = axum::body::to_bytes(body, body_limit.unwrap_or(usize::MAX))
        .await
        .map_err(EchoError::BodyRead)?;

    Ok(reflect(&parts, &bytes))
}

/// Build the reply for an already-buffered request.
pub fn reflect(parts: &Parts, body: &[u8]) -> EchoReply {
    let (host, port) = host_and_port(parts);
    let raw_query = parts.uri.query().unwrap_or_default();

    EchoReply {
        method: parts.method.to_string(),
        protocol: protocol_name(parts.version).to_string(),
        host,
        port,
        uri: parts.uri.to_string(),
        path: percent_decode_str(parts.uri.path())
            .decode_utf8_lossy()
            .into_owned(),
        query: query::canonicalize(raw_query),
        body: if body.is_empty() {
            EMPTY_BODY.to_string()
        } else {
            String::from_utf8_lossy(body).into_owned()
        },
        headers: headers::flatten(&parts.headers),
        params: query::decompose(raw_query),
    }
}

fn declared_length(parts: &Parts) -> Option<u64> {
    parts
        .headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
}

/// Host header (or URI authority for HTTP/2) split into host and port.
fn host_and_port(parts: &Parts) -> (String, String) {
    let raw = match parts.headers.get(header::HOST) {
        Some(value) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
        None => parts
            .uri
            .authority()
            .map(|authority| authority.as_str().to_string())
            .unwrap_or_default(),
    };

    match split(&raw, ":") {
        ("", "") => (raw, DEFAULT_PORT.to_string()),
        (host, "") => (host.to_string(), DEFAULT_PORT.to_string()),
        (host, port) => (host.to_string(), port.to_string()),
    }
}

fn protocol_name(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/?",
    }
}
