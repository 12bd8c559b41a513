use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 404 with an empty body.
    #[error("Not found")]
    NotFound,

    #[error("Course with id={0} not found")]
    CourseNotFound(i64),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl AppError {
    pub fn title_required() -> Self {
        AppError::BadRequest("Course title is required".to_string())
    }

    pub fn duplicate_title(name: &str) -> Self {
        AppError::Conflict(format!("Course with title {} already exists", name))
    }

    /// Update of an unknown id is reported as a bad request, not a 404.
    pub fn unknown_update_target(id: i64) -> Self {
        AppError::BadRequest(format!("Course with id={} not found", id))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            e @ AppError::CourseNotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Database(e) => {
                error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
