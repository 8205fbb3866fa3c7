use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use service::errors::ServiceError;

/// Error taxonomy for the HTTP surface, mapped explicitly to status codes.
/// Internal failures are logged server-side under an opaque identifier; the
/// raw error text never reaches the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Validation(msg) => ApiError::Validation(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(detail) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({"error": "Not Found", "detail": detail})),
            )
                .into_response(),
            ApiError::Validation(detail) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": "Validation Error", "detail": detail})),
            )
                .into_response(),
            ApiError::Internal(source) => {
                let error_id = Uuid::new_v4();
                error!(%error_id, error = %source, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"error": "Internal Server Error", "error_id": error_id})),
                )
                    .into_response()
            }
        }
    }
}
