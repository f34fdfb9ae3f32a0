//! Unified error handling for the backend API.
//!
//! Handlers return [`ApiResult`] and use `?` freely; every error renders as
//! an [`ErrorResponse`] body with a matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::api::ErrorResponse;
use thiserror::Error;
use validator::ValidationErrors;

use crate::repository::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Persistence layer failure
    #[error(transparent)]
    Store(StoreError),

    /// Resource not found
    #[error("{0} not found")]
    NotFound(String),

    /// Malformed request (bad id, unparsable body or query)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Well-formed request with invalid field values
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Unique constraint hit
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        ApiError::NotFound(resource.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(msg) => ApiError::Conflict(msg),
            other => ApiError::Store(other),
        }
    }
}

/// One line per invalid field, sorted by field name.
pub fn describe_validation(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);
    fields
        .into_iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("invalid {}", e.code),
                })
                .collect();
            format!("{}: {}", field, reasons.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, details) = match &self {
            ApiError::Store(StoreError::Pool(e)) => {
                tracing::error!("Connection pool error: {:?}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Database connection unavailable".to_string(),
                    None,
                )
            }
            ApiError::Store(e) => {
                tracing::error!("Store error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database operation failed".to_string(),
                    None,
                )
            }
            ApiError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                format!("{} not found", resource),
                None,
            ),
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone(), None)
            }
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(describe_validation(errors)),
            ),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone(), None),
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(e.to_string()),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            details,
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::not_found("Event"), StatusCode::NOT_FOUND),
            (ApiError::bad_request("bad id"), StatusCode::BAD_REQUEST),
            (
                ApiError::from(StoreError::Conflict("email taken".into())),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::from(StoreError::Database(diesel::result::Error::NotFound)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_describe_validation_is_sorted() {
        let mut errors = ValidationErrors::new();
        errors.add("title", ValidationError::new("length"));
        let mut time = ValidationError::new("time_format");
        time.message = Some("time must be HH:MM".into());
        errors.add("time", time);
        assert_eq!(
            describe_validation(&errors),
            "time: time must be HH:MM; title: invalid length"
        );
    }
}
