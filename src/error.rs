use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use thiserror::Error;

use crate::models::chat::{ChatResponse, Source};

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum RelayError {
    /// The caller sent a request the relay cannot act on.
    #[error("{0}")]
    InvalidInput(String),

    /// The upstream API answered with a non-success status.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Anything else. The detail is logged, never returned to the caller.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) => StatusCode::BAD_GATEWAY,
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        // the request URL carries the API key as a query parameter
        RelayError::Internal(format!("upstream request failed: {}", err.without_url()))
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        RelayError::Internal(format!("invalid JSON: {}", err))
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            RelayError::InvalidInput(message) => ChatResponse::failure(None, message),
            RelayError::Upstream(message) => ChatResponse::failure(Some(Source::Gemini), message),
            RelayError::Internal(detail) => {
                error!("Chat error: {}", detail);
                ChatResponse::failure(None, INTERNAL_ERROR_MESSAGE.to_string())
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_maps_to_its_status() {
        assert_eq!(
            RelayError::InvalidInput("Message is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RelayError::Upstream("quota".into()).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            RelayError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_is_not_exposed() {
        let response = RelayError::Internal("secret stack trace".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn json_errors_become_internal() {
        let err: RelayError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, RelayError::Internal(_)));
    }
}
