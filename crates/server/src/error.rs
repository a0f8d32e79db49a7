//! Unified error handling with Sentry integration.
//!
//! Route handlers return `Result<T, AppError>`. Store failures that are the
//! caller's fault map to 4xx statuses; everything else is captured to Sentry
//! and answered with a generic 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::{ErrorKind, RepositoryError};

/// Application-level error type for the shop server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),
}

impl AppError {
    /// HTTP status the error is reported with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Database(err) => match err.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::AlreadyExists => StatusCode::CONFLICT,
                ErrorKind::InvalidStatus
                | ErrorKind::InvalidPickupMethod
                | ErrorKind::NoCategory => StatusCode::UNPROCESSABLE_ENTITY,
                ErrorKind::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(err) if !status.is_server_error() => err.kind().to_string(),
            _ => "Internal server error".to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn db(kind: ErrorKind) -> AppError {
        AppError::Database(RepositoryError::new("test.op", kind))
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(db(ErrorKind::NotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(db(ErrorKind::AlreadyExists).status(), StatusCode::CONFLICT);
        assert_eq!(
            db(ErrorKind::InvalidStatus).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            db(ErrorKind::InvalidPickupMethod).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            db(ErrorKind::NoCategory).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            db(ErrorKind::Unknown(sqlx::Error::PoolTimedOut)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let response = db(ErrorKind::AlreadyExists).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_unknown_store_error_is_500() {
        let response = db(ErrorKind::Unknown(sqlx::Error::PoolTimedOut)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
