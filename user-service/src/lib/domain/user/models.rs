use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::UserError;
use crate::user::errors::UserIdError;

/// User aggregate entity.
///
/// Email uniqueness is a storage concern; see `UserRepository::create`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new user with a fresh identifier and current timestamps.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Email address, stored as given
    /// * `password_hash` - Already hashed password
    ///
    /// # Errors
    /// * `InvalidUserData` - Any of the fields is empty
    pub fn new(name: String, email: String, password_hash: String) -> Result<Self, UserError> {
        if name.is_empty() || email.is_empty() || password_hash.is_empty() {
            return Err(UserError::InvalidUserData(
                "name, email, and password are required".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: UserId::new(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn update_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    pub fn update_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }
}

/// User unique identifier type.
///
/// Rendered as 32 lowercase hex digits; parsing also accepts the hyphenated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid identifier
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.simple().fmt(f)
    }
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Command to create a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserCommand {
    /// # Arguments
    /// * `name` - Display name
    /// * `email` - Email address
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// Command to update an existing user.
///
/// Only provided fields are updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserCommand {
    pub name: Option<String>,
    pub email: Option<String>,
}
