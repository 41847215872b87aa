//! Access log middleware.
//!
//! One line per request: status, method, path and humanized elapsed time.
//! Client and server errors (status >= 400) log at `warn`.

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::request::RequestIdExt;

pub async fn access_log(request: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request.request_id().unwrap_or("unknown").to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed = format_elapsed(started.elapsed());

    if status >= 400 {
        tracing::warn!(request_id = %request_id, status, method = %method, path = %path, elapsed = %elapsed, "Request served");
    } else {
        tracing::info!(request_id = %request_id, status, method = %method, path = %path, elapsed = %elapsed, "Request served");
    }

    response
}

/// Render `elapsed` in the coarsest unit that keeps it readable.
///
/// Over 5s: seconds; over 1ms: milliseconds; over 1µs: whole microseconds;
/// otherwise nanoseconds.
pub fn format_elapsed(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();

    if nanos > 5_000_000_000 {
        format!("{:.1} sec", nanos as f64 / 1e9)
    } else if nanos > 1_000_000 {
        format!("{:.1} ms", nanos as f64 / 1e6)
    } else if nanos > 1_000 {
        format!("{} µs", nanos / 1_000)
    } else {
        format!("{} ns", nanos)
    }
}
