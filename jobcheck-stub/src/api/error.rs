//! API Error Handling
//!
//! Conversion of service errors into HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::job_service::JobError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Unauthorized,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::error!("{}", msg);
                (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": msg }))).into_response()
            }
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [("WWW-Authenticate", "Basic realm=\"jobs\"")],
            )
                .into_response(),
        }
    }
}

impl From<JobError> for ApiError {
    fn from(err: JobError) -> Self {
        match err {
            JobError::NotFound(_) => ApiError::NotFound(err.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
