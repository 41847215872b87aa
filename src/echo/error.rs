//! Per-request failures.
//!
//! Every variant is scoped to the request that produced it. The boundary turns
//! it into a response; nothing here brings the process down.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum EchoError {
    /// The request body could not be read to completion.
    #[error("failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    /// The declared body length exceeds the configured cap.
    #[error("request body of {length} bytes exceeds the {limit} byte limit")]
    BodyTooLarge { length: u64, limit: usize },

    /// A document could not be rendered as JSON.
    #[error("failed to serialize reply: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Deliberate fault raised by the crash endpoint.
    #[error("crash requested: {0}")]
    Crash(String),
}

impl EchoError {
    pub fn status(&self) -> StatusCode {
        match self {
            EchoError::BodyRead(_) => StatusCode::BAD_REQUEST,
            EchoError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            EchoError::Serialize(_) | EchoError::Crash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EchoError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            EchoError::Crash(_) => tracing::error!(error = %self, "Handler crashed"),
            _ if status.is_server_error() => tracing::error!(error = %self, "Request failed"),
            _ => tracing::warn!(error = %self, "Request rejected"),
        }

        (status, self.to_string()).into_response()
    }
}
