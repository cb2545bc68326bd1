use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures a chat request can surface. The HTTP mapping is uniform (500 with
/// the error text as `detail`), but callers can still tell a bad credential
/// from a rejected payload or a flaky upstream.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("config: {0}")]
    Config(String),
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("upstream: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Upstream(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
