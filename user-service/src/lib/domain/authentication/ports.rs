use async_trait::async_trait;

use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::LoginSession;
use crate::domain::authentication::models::RegisterCommand;
use crate::domain::authentication::models::Registration;
use crate::domain::user::models::UserProfile;
use crate::user::errors::UserError;

/// Port for authentication operations consumed by handlers and middleware.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Returns
    /// New user ID and a confirmation message
    ///
    /// # Errors
    /// * `AlreadyExists` - Email is already registered
    /// * `EmptyPassword` - Password is empty
    /// * `InvalidUserData` - Name or email is empty
    /// * `HashingFailed` - Password hashing failed
    /// * `DatabaseError` - Persisting the user failed
    async fn register(&self, command: RegisterCommand) -> Result<Registration, UserError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Returns
    /// Token plus the public profile of the user
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `InvalidSecret` - Signing secret is not configured
    /// * `TokenIssueFailed` - Token encoding failed
    async fn login(&self, command: LoginCommand) -> Result<LoginSession, UserError>;

    /// Resolve a token to the current profile of its user.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, tampered, or expired token
    /// * `NotFound` - Token is valid but the account no longer exists
    /// * `DatabaseError` - Lookup failed
    async fn validate_token(&self, token: &str) -> Result<UserProfile, UserError>;
}
