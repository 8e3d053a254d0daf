//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use stepview_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always false for error responses.
    pub ok: bool,
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable reason.
    pub reason: String,
}

/// Newtype carrying an [`AppError`] across the Axum handler boundary.
///
/// Handlers return `Result<_, ApiError>` so `?` converts any
/// `AppError` (or error convertible into one) into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = match &err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::UnsupportedMedia => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "UNSUPPORTED_MEDIA_TYPE")
            }
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conversion => {
                tracing::error!(error = %err.message, "Conversion failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "CONVERSION_FAILED")
            }
            ErrorKind::Storage | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(error = %err.message, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiErrorResponse {
            ok: false,
            error: error_code.to_string(),
            reason: err.message,
        };

        (status, Json(body)).into_response()
    }
}
