use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid user ID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all user and authentication operations.
///
/// `InvalidCredentials` and `InvalidToken` are intentionally coarse: the first
/// covers both unknown email and wrong password, the second covers malformed,
/// tampered and expired tokens alike.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid user data: {0}")]
    InvalidUserData(String),

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("User already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid token secret")]
    InvalidSecret,

    #[error("Token generation failed: {0}")]
    TokenIssueFailed(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<PasswordError> for UserError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::EmptyInput => UserError::EmptyPassword,
            PasswordError::HashingFailed(msg) => UserError::HashingFailed(msg),
            PasswordError::Mismatch => UserError::InvalidCredentials,
        }
    }
}

impl From<JwtError> for UserError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::InvalidSecret => UserError::InvalidSecret,
            JwtError::EncodingFailed(msg) => UserError::TokenIssueFailed(msg),
            JwtError::InvalidToken => UserError::InvalidToken,
        }
    }
}
