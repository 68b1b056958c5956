use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims carried by an access token.
///
/// `user_id` and `email` are a snapshot taken at issuance; they are never
/// re-validated against the current account state by this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject identifier (hex string form)
    pub user_id: String,

    /// Email at issuance time
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, issued now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `email` - User email at issuance time
    /// * `lifetime` - Time until the token expires
    pub fn for_user(user_id: impl ToString, email: impl Into<String>, lifetime: Duration) -> Self {
        Self::issued_at(user_id, email, Utc::now(), lifetime)
    }

    /// Create claims for a user with an explicit issuance instant.
    pub fn issued_at(
        user_id: impl ToString,
        email: impl Into<String>,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            email: email.into(),
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
        }
    }
}
