//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Client-facing messages are fixed per variant. Internal details (database,
//! hashing, signing) are logged and never sent to the client.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed request body or a field that fails validation
    #[error("{0}")]
    Validation(String),

    /// Email is already registered
    #[error("Email already exists")]
    EmailTaken,

    /// No account with this email
    #[error("Email does not exist")]
    EmailNotFound,

    /// Wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Bearer token missing, malformed, expired or forged
    #[error("Unauthorized: {0}")]
    Unauthorized(TokenError),

    /// Token subject has no matching user
    #[error("User not found")]
    UserNotFound,

    /// Password hashing failed or a stored hash is malformed
    #[error("Password hash error: {0}")]
    PasswordHash(#[from] PasswordHashError),

    /// Token could not be signed
    #[error("Token signing error: {0}")]
    TokenSigning(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    ///
    /// `EmailNotFound` and `InvalidCredentials` share a status so callers
    /// cannot probe which emails are registered by status alone.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::EmailTaken | AuthError::EmailNotFound | AuthError::InvalidCredentials => {
                ErrorKind::Conflict
            }
            AuthError::Unauthorized(_) | AuthError::UserNotFound => ErrorKind::Unauthorized,
            AuthError::PasswordHash(_)
            | AuthError::TokenSigning(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Message sent to the client
    pub fn public_message(&self) -> String {
        match self {
            AuthError::Validation(msg) => msg.clone(),
            AuthError::EmailTaken | AuthError::EmailNotFound | AuthError::InvalidCredentials => {
                self.to_string()
            }
            AuthError::Unauthorized(_) | AuthError::UserNotFound => "Unauthorized".to_string(),
            _ => "Internal server error".to_string(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        if self.kind().is_server_error() {
            tracing::error!(error = %self, "Auth internal error");
            return;
        }

        match self {
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::Unauthorized(TokenError::BadSignature) => {
                tracing::warn!("Token with invalid signature presented");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<PasswordPolicyError> for AuthError {
    fn from(err: PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::Validation(rejection.body_text())
    }
}
