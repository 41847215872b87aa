//! Route handlers.
//!
//! `/env` and `/system` serve documents captured at startup, `/fail` and
//! `/crash` inject faults, and every other path is reflected.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse},
};

use crate::echo::{reflect_request, EchoError, EchoReply, JsonDocument};
use crate::http::request::RequestIdExt;
use crate::http::server::AppState;
use crate::info::{EnvSnapshot, SystemInfo};

/// Body returned by `/fail`.
pub const FAIL_BODY: &str = "Intentional failure";

/// Reflect the request back as an [`EchoReply`].
pub async fn echo(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Result<JsonDocument<EchoReply>, EchoError> {
    tracing::debug!(
        request_id = request.request_id().unwrap_or("unknown"),
        method = %request.method(),
        uri = %request.uri(),
        "Reflecting request"
    );

    let reply = reflect_request(request, state.body_limit).await?;
    Ok(JsonDocument(reply))
}

pub async fn env(State(state): State<AppState>) -> JsonDocument<EnvSnapshot> {
    JsonDocument(state.env.as_ref().clone())
}

pub async fn system(State(state): State<AppState>) -> JsonDocument<SystemInfo> {
    JsonDocument(state.system.as_ref().clone())
}

pub async fn hi() -> Html<&'static str> {
    Html("<h1>Hello you!</h1>")
}

/// Always answers 400 with a fixed plain-text body.
pub async fn fail() -> impl IntoResponse {
    (StatusCode::BAD_REQUEST, FAIL_BODY)
}

/// Always fails with [`EchoError::Crash`].
pub async fn crash() -> Result<StatusCode, EchoError> {
    Err(EchoError::Crash("intentional crash".to_string()))
}
