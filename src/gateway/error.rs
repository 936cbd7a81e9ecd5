//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::engine::EngineError;

/// Errors surfaced to HTTP callers.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Scan failed (invalid input, provider failure, ...).
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Provider credentials are not configured on this server.
    #[error("search provider credentials are not configured")]
    CredentialsNotConfigured,
}

impl GatewayError {
    fn status(&self) -> StatusCode {
        match self {
            GatewayError::Engine(EngineError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            GatewayError::Engine(EngineError::Provider(_))
            | GatewayError::Engine(EngineError::AllQueriesFailed { .. }) => {
                StatusCode::BAD_GATEWAY
            }
            GatewayError::CredentialsNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
