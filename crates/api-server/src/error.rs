//! Error taxonomy for the HTTP surface
//!
//! Two kinds of failure exist: a missing required field (400) and a reference
//! to a task that does not exist (404). Both surface as an `{"error": ...}`
//! JSON body. Nothing here is retried or fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A required request field is missing or blank
    #[error("{0} is required")]
    Validation(&'static str),

    /// The referenced task id does not exist
    #[error("Task not found")]
    TaskNotFound,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::TaskNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::Validation("Title");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Title is required");
    }

    #[test]
    fn test_task_not_found_maps_to_not_found() {
        let err = ApiError::TaskNotFound;
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Task not found");
    }
}
