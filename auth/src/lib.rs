//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure:
//! - Password hashing (Argon2id)
//! - JWT token generation and validation (HS256)
//! - Authentication coordination
//!
//! Services define their own account lookup and adapt these implementations.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).is_ok());
//! assert!(hasher.verify("other", &hash).is_err());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenConfig};
//!
//! let auth = Authenticator::new(&TokenConfig::with_default_lifetime(
//!     "secret_key_at_least_32_bytes_long!",
//! ));
//!
//! let hash = auth.hash_password("password123").unwrap();
//! auth.verify_password("password123", &hash).unwrap();
//!
//! let token = auth.issue_token("user123", "alice@example.com").unwrap();
//! let claims = auth.validate_token(&token).unwrap();
//! assert_eq!(claims.user_id, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::Authenticator;
pub use authenticator::TokenConfig;
pub use authenticator::DEFAULT_TOKEN_LIFETIME_HOURS;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
