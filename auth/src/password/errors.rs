use thiserror::Error;

/// Error type for password operations.
///
/// Verification deliberately has a single failure kind: a malformed hash and a
/// wrong password are indistinguishable to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password cannot be empty")]
    EmptyInput,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password does not match")]
    Mismatch,
}
