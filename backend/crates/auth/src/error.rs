//! Auth error type, bridged into `kernel::error::AppError` at the
//! HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User name already exists")]
    UserNameTaken,

    /// Unknown user and wrong password share this variant so the
    /// response never reveals which one it was.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session not found or expired")]
    SessionInvalid,

    #[error("Admin access required")]
    AdminRequired,

    #[error("Invalid user name: {0}")]
    InvalidUserName(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        use AuthError::*;
        match self {
            UserNameTaken => ErrorKind::Conflict,
            InvalidCredentials | SessionInvalid => ErrorKind::Unauthorized,
            AdminRequired => ErrorKind::Forbidden,
            InvalidUserName(_) | InvalidEmail(_) | PasswordValidation(_) => ErrorKind::BadRequest,
            Database(_) | Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Client-facing form. Server-side failures collapse to a generic
    /// message; the detail only reaches the logs.
    pub fn to_app_error(&self) -> AppError {
        let message = if self.kind().is_server_error() {
            "An unexpected error occurred".into()
        } else {
            self.to_string()
        };
        AppError::new(self.kind(), message)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::Database(e) => tracing::error!(error = %e, "Auth database error"),
            AuthError::Internal(msg) => tracing::error!(message = %msg, "Auth internal error"),
            AuthError::InvalidCredentials => tracing::warn!("Invalid login attempt"),
            AuthError::AdminRequired => tracing::warn!("Non-admin attempted an admin operation"),
            other => tracing::debug!(error = %other, "Auth error"),
        }
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AuthError::UserNameTaken, StatusCode::CONFLICT),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::SessionInvalid, StatusCode::UNAUTHORIZED),
            (AuthError::AdminRequired, StatusCode::FORBIDDEN),
            (
                AuthError::PasswordValidation("weak".into()),
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code(), status, "{err}");
        }
    }

    #[test]
    fn test_internal_errors_are_not_leaked() {
        let err = AuthError::Internal("connection string was postgres://user:pass@db".into());
        assert_eq!(err.to_app_error().message(), "An unexpected error occurred");

        let err = AuthError::Database(sqlx::Error::PoolClosed);
        assert!(!err.to_app_error().message().contains("pool"));
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let err = AuthError::UserNameTaken;
        assert_eq!(err.to_app_error().message(), "User name already exists");
    }
}
