//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use draftshare_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Error returned by editor and public handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Error returned by the toggle endpoint, rendered in the toggle envelope
/// `{ "success": false, "data": "<code>" }`.
#[derive(Debug)]
pub struct ToggleError(pub AppError);

impl From<AppError> for ToggleError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::IncompleteRequest | ErrorKind::UnknownStatus => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden | ErrorKind::AntiForgery | ErrorKind::LinkExpired => {
            StatusCode::FORBIDDEN
        }
        ErrorKind::NotFound | ErrorKind::NotRegistered => StatusCode::NOT_FOUND,
        ErrorKind::NotSaved
        | ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn log_server_error(err: &AppError, status: StatusCode) {
    if status.is_server_error() {
        tracing::error!(kind = %err.kind, error = %err.message, "Request failed");
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);
        log_server_error(&err, status);

        match err.kind {
            // Visitor-facing failures carry only the message.
            ErrorKind::LinkExpired | ErrorKind::NotRegistered => {
                (status, err.message).into_response()
            }
            _ => {
                let body = ApiErrorResponse {
                    error: err.kind.to_string(),
                    message: err.message,
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl IntoResponse for ToggleError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);
        log_server_error(&err, status);

        let body = serde_json::json!({ "success": false, "data": err.kind.code() });
        (status, Json(body)).into_response()
    }
}
