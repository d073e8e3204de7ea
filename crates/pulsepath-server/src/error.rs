use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pulsepath_providers::ProviderError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    reason: &'static str,
    code: u16,
}

impl ServerError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Provider(e) => match e {
                ProviderError::Transport { timed_out: true, .. } => StatusCode::GATEWAY_TIMEOUT,
                ProviderError::Transport { .. } => StatusCode::SERVICE_UNAVAILABLE,
                ProviderError::Upstream { .. } | ProviderError::MalformedResponse { .. } => {
                    StatusCode::BAD_GATEWAY
                }
                ProviderError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "invalid_request",
            ServerError::Internal(_) => "internal",
            ServerError::Provider(e) => e.reason(),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let reason = self.reason();

        if status.is_server_error() {
            tracing::error!(%status, reason, error = %self, "Request failed");
        } else {
            tracing::debug!(%status, reason, error = %self, "Request rejected");
        }

        // Upstream error bodies stay in the logs, never in the response.
        let message = match &self {
            ServerError::Provider(ProviderError::Upstream { provider, status, .. }) => {
                format!("{} rejected the request with status {}", provider, status)
            }
            other => other.to_string(),
        };

        let body = Json(ErrorResponse {
            error: message,
            reason,
            code: status.as_u16(),
        });

        (status, body).into_response()
    }
}
