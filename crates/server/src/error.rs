//! Unified error handling for route handlers.
//!
//! Provides a unified `AppError` type mapped onto HTTP responses. All route
//! handlers return `Result<T, AppError>`. Recoverable outcomes (validation
//! failures, ownership-scoped misses) are normally converted into a session
//! notice by the handlers themselves; the mappings here are the fallback.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::{ProductServiceError, UserServiceError};

/// Application-level error type for the inventory server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Session store operation failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Malformed or negative input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Ownership-scoped lookup miss. Never distinguishes "exists but not
    /// yours" from "does not exist".
    #[error("Not found: {0}")]
    NotFound(String),

    /// No active session user.
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Malformed multipart payload.
    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ProductServiceError> for AppError {
    fn from(err: ProductServiceError) -> Self {
        match err {
            ProductServiceError::InvalidCost(_) | ProductServiceError::EmptyName => {
                Self::Validation(err.to_string())
            }
            ProductServiceError::NotFound => Self::NotFound("product".to_string()),
            ProductServiceError::Repository(e) => Self::Repository(e),
        }
    }
}

impl From<UserServiceError> for AppError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::EmptyUsername | UserServiceError::EmptyEmail => {
                Self::Validation(err.to_string())
            }
            UserServiceError::Upload(e) => Self::Internal(format!("upload failed: {e}")),
            UserServiceError::Repository(e) => Self::Repository(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // An anonymous session is not a failure; send the client to
        // registration instead.
        if matches!(self, Self::Unauthenticated) {
            return Redirect::to("/users/new").into_response();
        }

        if matches!(
            self,
            Self::Repository(_) | Self::Session(_) | Self::Internal(_)
        ) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Repository(_) | Self::Session(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::SEE_OTHER,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Repository(_) | Self::Session(_) | Self::Internal(_) => {
                "Internal server error".to_string()
            }
            Self::Multipart(_) => "Malformed upload".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product".to_string());
        assert_eq!(err.to_string(), "Not found: product");

        let err = AppError::Validation("invalid cost".to_string());
        assert_eq!(err.to_string(), "Validation error: invalid cost");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Validation("test".to_string())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthenticated_redirects_to_registration() {
        let response = AppError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response
                .headers()
                .get(axum::http::header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some("/users/new")
        );
    }

    #[test]
    fn test_service_error_mapping() {
        assert!(matches!(
            AppError::from(ProductServiceError::EmptyName),
            AppError::Validation(_)
        ));
        assert!(matches!(
            AppError::from(ProductServiceError::NotFound),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(UserServiceError::EmptyEmail),
            AppError::Validation(_)
        ));
    }
}
