use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::ActivityError;
use crate::models::ErrorBody;

/// Failures surfaced by the HTTP handlers as `{"detail": ...}` bodies.
#[derive(Debug)]
pub enum ApiError {
    Activity(ActivityError),
    MissingParameter(&'static str),
    /// The path or query string could not be decoded.
    MalformedRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Activity(ActivityError::NotFound | ActivityError::NotRegistered) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Activity(
                ActivityError::AlreadyRegistered
                | ActivityError::ActivityFull
                | ActivityError::InvalidEmail,
            ) => StatusCode::BAD_REQUEST,
            ApiError::MissingParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::Activity(e) => e.to_string(),
            ApiError::MissingParameter(name) => {
                format!("Missing required query parameter: {}", name)
            }
            ApiError::MalformedRequest(reason) => format!("Malformed request: {}", reason),
        }
    }
}

impl From<ActivityError> for ApiError {
    fn from(e: ActivityError) -> Self {
        ApiError::Activity(e)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.detail(),
        };
        (self.status(), Json(body)).into_response()
    }
}
