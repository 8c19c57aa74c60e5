//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use confab_types::error::{CompletionError, SessionError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Session operation failed (remote completion service).
    Session(SessionError),
    /// Validation error in the request body.
    Validation(String),
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::Session(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Session(SessionError::Completion(CompletionError::AuthenticationFailed)) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_AUTH",
                "completion provider rejected the configured credential".to_string(),
            ),
            AppError::Session(SessionError::Completion(CompletionError::RateLimited)) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "UPSTREAM_RATE_LIMITED",
                "completion provider is rate limiting requests".to_string(),
            ),
            AppError::Session(e) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", e.to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        };

        let body = json!({
            "error": {
                "code": code,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_failure_maps_to_bad_gateway() {
        let err = AppError::from(SessionError::Completion(
            CompletionError::AuthenticationFailed,
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_rate_limit_maps_to_service_unavailable() {
        let err = AppError::from(SessionError::Completion(CompletionError::RateLimited));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::Validation("message must not be empty".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
