use thiserror::Error;

/// Error type for JWT operations.
///
/// Decoding failures are collapsed into `InvalidToken`: callers never learn
/// whether a token was malformed, tampered with, or expired.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Invalid token secret")]
    InvalidSecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Invalid token")]
    InvalidToken,
}
