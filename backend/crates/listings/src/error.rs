//! Listing Error Types
//!
//! Listing-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Listing-specific result type alias
pub type ListingResult<T> = Result<T, ListingError>;

/// Listing-specific error variants
#[derive(Debug, Error)]
pub enum ListingError {
    /// Listing ID is not a valid UUID
    #[error("Invalid listing id: {0}")]
    InvalidId(String),

    /// Listing not found (or soft-deleted)
    #[error("Listing not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ListingError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ListingError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ListingError::NotFound => StatusCode::NOT_FOUND,
            ListingError::Database(_) | ListingError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ListingError::InvalidId(_) => ErrorKind::BadRequest,
            ListingError::NotFound => ErrorKind::NotFound,
            ListingError::Database(_) | ListingError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError for the HTTP response.
    ///
    /// Server-side failures get a generic message; raw database or
    /// internal error text never reaches the client.
    pub fn to_app_error(&self) -> AppError {
        match self {
            ListingError::Database(_) | ListingError::Internal(_) => {
                AppError::new(self.kind(), "An unexpected error occurred")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ListingError::Database(e) => {
                tracing::error!(error = %e, "Listing database error");
            }
            ListingError::Internal(msg) => {
                tracing::error!(message = %msg, "Listing internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Listing error");
            }
        }
    }
}

impl From<ListingError> for AppError {
    fn from(err: ListingError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
