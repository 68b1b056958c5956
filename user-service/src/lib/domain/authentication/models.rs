use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;

pub const REGISTRATION_MESSAGE: &str = "User registered successfully";

/// Command to register a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterCommand {
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// Command to log in with email and password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

/// Outcome of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: UserId,
    pub message: String,
}

/// Outcome of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSession {
    pub token: String,
    pub user: UserProfile,
}
