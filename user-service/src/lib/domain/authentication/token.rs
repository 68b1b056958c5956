use std::sync::Arc;

use auth::Authenticator;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Issues and validates identity tokens.
///
/// Stateless per call. A token is treated as a reference to an account, not a
/// cache of it: every validation re-reads the user from the repository.
pub struct TokenAuthority<UR>
where
    UR: UserRepository,
{
    authenticator: Arc<Authenticator>,
    repository: Arc<UR>,
}

impl<UR> TokenAuthority<UR>
where
    UR: UserRepository,
{
    pub fn new(authenticator: Arc<Authenticator>, repository: Arc<UR>) -> Self {
        Self {
            authenticator,
            repository,
        }
    }

    /// Issue a token for the user.
    ///
    /// # Errors
    /// * `InvalidSecret` - Signing secret is empty
    /// * `TokenIssueFailed` - Encoding failed
    pub fn issue(&self, user: &User) -> Result<String, UserError> {
        Ok(self.authenticator.issue_token(user.id, &user.email)?)
    }

    /// Validate a token and load the user it refers to.
    ///
    /// # Returns
    /// The freshly loaded user, not the claims snapshot
    ///
    /// # Errors
    /// * `InvalidToken` - Signature, expiry, or subject check failed
    /// * `NotFound` - Subject no longer resolves to a user
    /// * `DatabaseError` - Lookup failed
    pub async fn validate(&self, token: &str) -> Result<User, UserError> {
        let claims = self.authenticator.validate_token(token)?;

        let user_id =
            UserId::from_string(&claims.user_id).map_err(|_| UserError::InvalidToken)?;

        self.repository
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| UserError::NotFound(user_id.to_string()))
    }
}
