use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Structured error types for the weather dashboard.
///
/// The variants form the user-facing taxonomy: an empty query and an
/// unresolvable city are distinct negative results, a timed-out upstream call
/// is distinct from any other upstream failure, and everything else collapses
/// into a generic 500. Callers can never mistake "no data" for "provider
/// unreachable".
#[derive(Error, Debug)]
pub enum AppError {
    #[error("city name cannot be empty")]
    EmptyQuery,

    #[error("city not found")]
    CityNotFound,

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("upstream returned {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Client-facing error body, `{"detail": "..."}`.
#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl AppError {
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::UpstreamStatus {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The message sent to clients. Upstream detail is logged, never leaked.
    fn detail(&self) -> &'static str {
        match self {
            AppError::EmptyQuery => "Not Found",
            AppError::CityNotFound => "City not found",
            AppError::Timeout(_) => "Request timeout",
            AppError::UpstreamStatus { .. }
            | AppError::Network(_)
            | AppError::Parse(_)
            | AppError::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::EmptyQuery | AppError::CityNotFound => StatusCode::NOT_FOUND,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::UpstreamStatus { .. }
            | AppError::Network(_)
            | AppError::Parse(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let body = Json(ErrorDetail {
            detail: self.detail().to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_and_not_found_are_distinct_404s() {
        let empty = AppError::EmptyQuery.into_response();
        let missing = AppError::CityNotFound.into_response();
        assert_eq!(empty.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::EmptyQuery.detail(), "Not Found");
        assert_eq!(AppError::CityNotFound.detail(), "City not found");
    }

    #[test]
    fn timeout_maps_to_504() {
        let resp = AppError::timeout("weather call").into_response();
        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn upstream_detail_is_not_leaked() {
        let err = AppError::upstream(502, "secret provider internals");
        assert_eq!(err.detail(), "Internal server error");
    }
}
