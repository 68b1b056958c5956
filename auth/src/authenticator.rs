use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Default access token lifetime.
pub const DEFAULT_TOKEN_LIFETIME_HOURS: i64 = 24;

/// Signing configuration injected at construction.
///
/// Loaded once at startup and never rotated while running. An empty secret is
/// accepted here and surfaces later as `JwtError::InvalidSecret` on every issue.
#[derive(Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub lifetime: Duration,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>, lifetime: Duration) -> Self {
        Self {
            secret: secret.into(),
            lifetime,
        }
    }

    /// Configuration with the default 24 hour lifetime.
    pub fn with_default_lifetime(secret: impl Into<String>) -> Self {
        Self::new(secret, Duration::hours(DEFAULT_TOKEN_LIFETIME_HOURS))
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("lifetime", &self.lifetime)
            .finish()
    }
}

/// Authentication coordinator combining password hashing and JWT handling.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_lifetime: Duration,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `config` - Signing secret and token lifetime
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(config.secret.as_bytes()),
            token_lifetime: config.lifetime,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `EmptyInput` - Password is empty
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against its stored hash.
    ///
    /// # Errors
    /// * `Mismatch` - Wrong password or malformed stored hash
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<(), PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Generate a token for the given identity.
    ///
    /// Claims carry `user_id` and `email`, issued now and expiring after the
    /// configured lifetime.
    ///
    /// # Errors
    /// * `InvalidSecret` - Configured secret is empty
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(&self, user_id: impl ToString, email: &str) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, email, self.token_lifetime);
        self.jwt_handler.encode(&claims)
    }

    /// Validate and decode a token.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, tampered with, or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
