/**
 * Backend Error Types
 *
 * `ErrorCode` is the closed set of outcomes a caller can observe, with a
 * fixed status/message table. `BackendError` is what handlers return: either
 * one of those codes, or an underlying failure (database, hashing, blocking
 * task) that is reported to the caller as `ErrorCode::Internal`.
 */

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::{Field, ValidationError};

/// Caller-visible error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The query string could not be decoded into the endpoint's parameters
    MalformedQuery,
    HandleEmpty,
    EmailEmpty,
    PasswordEmpty,
    HandleTooLong,
    EmailTooLong,
    EmailTaken,
    HandleTaken,
    /// Unknown email and wrong password are deliberately the same code
    CredentialsMismatch,
    NoSession,
    Internal,
}

impl ErrorCode {
    /// Status code and message for this error code
    ///
    /// # Example
    ///
    /// ```rust
    /// use axum::http::StatusCode;
    /// use boardgame_site::backend::error::ErrorCode;
    ///
    /// let (status, message) = ErrorCode::EmailTaken.response_parts();
    /// assert_eq!(status, StatusCode::FORBIDDEN);
    /// assert_eq!(message, "email is already registered");
    /// ```
    pub const fn response_parts(self) -> (StatusCode, &'static str) {
        match self {
            Self::MalformedQuery => (StatusCode::FORBIDDEN, "malformed query string"),
            Self::HandleEmpty => (StatusCode::FORBIDDEN, "handle must not be empty"),
            Self::EmailEmpty => (StatusCode::FORBIDDEN, "email must not be empty"),
            Self::PasswordEmpty => (StatusCode::FORBIDDEN, "password must not be empty"),
            Self::HandleTooLong => (StatusCode::FORBIDDEN, "handle must be at most 50 characters"),
            Self::EmailTooLong => (StatusCode::FORBIDDEN, "email must be at most 200 characters"),
            Self::EmailTaken => (StatusCode::FORBIDDEN, "email is already registered"),
            Self::HandleTaken => (StatusCode::FORBIDDEN, "handle is already taken"),
            Self::CredentialsMismatch => (StatusCode::FORBIDDEN, "email or password is incorrect"),
            Self::NoSession => (StatusCode::FORBIDDEN, "no session"),
            Self::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        }
    }

    pub const fn message(self) -> &'static str {
        self.response_parts().1
    }
}

impl From<ValidationError> for ErrorCode {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Empty(Field::Handle) => Self::HandleEmpty,
            ValidationError::Empty(Field::Email) => Self::EmailEmpty,
            ValidationError::Empty(Field::Password) => Self::PasswordEmpty,
            ValidationError::TooLong { field: Field::Handle, .. } => Self::HandleTooLong,
            ValidationError::TooLong { field: Field::Email, .. } => Self::EmailTooLong,
            // passwords have no length limit
            ValidationError::TooLong { field: Field::Password, .. } => Self::Internal,
        }
    }
}

/// Errors returned by the auth handlers
#[derive(Debug, Error)]
pub enum BackendError {
    /// A caller-visible condition with a fixed response
    #[error("{}", .0.message())]
    Auth(ErrorCode),

    /// Query string rejected by the extractor
    #[error("malformed query string: {0}")]
    Query(#[from] QueryRejection),

    /// Account store failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure at startup
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// bcrypt failure while hashing or verifying
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// A blocking task panicked or was cancelled
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl BackendError {
    /// The code reported to the caller
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Auth(code) => *code,
            Self::Query(_) => ErrorCode::MalformedQuery,
            _ => ErrorCode::Internal,
        }
    }

    /// Whether the underlying failure is hidden behind `Internal`
    pub fn is_masked(&self) -> bool {
        !matches!(self, Self::Auth(_) | Self::Query(_))
    }
}

impl From<ErrorCode> for BackendError {
    fn from(code: ErrorCode) -> Self {
        Self::Auth(code)
    }
}

impl From<ValidationError> for BackendError {
    fn from(err: ValidationError) -> Self {
        Self::Auth(err.into())
    }
}
