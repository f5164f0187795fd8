use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::state::{clock::ClockParseError, matches::MatchStoreError};

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Unauthorized access attempt.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Operation cannot be performed in the current state.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<MatchStoreError> for ServiceError {
    fn from(err: MatchStoreError) -> Self {
        match err {
            MatchStoreError::NotFound(_) => ServiceError::NotFound(err.to_string()),
            MatchStoreError::InvalidTransition(invalid) => {
                ServiceError::InvalidState(invalid.to_string())
            }
        }
    }
}

impl From<ClockParseError> for ServiceError {
    fn from(err: ClockParseError) -> Self {
        ServiceError::InvalidInput(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::BadRequest(format!("validation failed: {}", err))
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Unauthorized access attempt.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Conflict with current state.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unauthorized(message) => AppError::Unauthorized(message),
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
            ServiceError::InvalidState(message) => AppError::Conflict(message),
            ServiceError::NotFound(message) => AppError::NotFound(message),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::status::{InvalidTransition, MatchStatus};

    #[test]
    fn store_errors_map_to_http_statuses() {
        let not_found: AppError = ServiceError::from(MatchStoreError::NotFound(7)).into();
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let conflict: AppError = ServiceError::from(MatchStoreError::InvalidTransition(
            InvalidTransition {
                from: MatchStatus::Finished,
                to: MatchStatus::Live,
            },
        ))
        .into();
        assert_eq!(conflict.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn clock_errors_are_bad_requests() {
        let err: AppError = ServiceError::from(ClockParseError("nope".into())).into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
