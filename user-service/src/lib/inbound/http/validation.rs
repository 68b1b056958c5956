//! Declarative request validation.
//!
//! Each request shape lists its fields with an ordered set of checks. A field
//! without `Required` is optional: an absent or empty value skips the rest of
//! its checks.

use email_address::EmailAddress;
use thiserror::Error;

use super::handlers::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Required,
    /// Minimum length counted in characters, not bytes.
    MinChars(usize),
    Email,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be a valid email address")]
    InvalidEmail { field: &'static str },
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

/// One field of a request shape together with its checks.
pub struct Field<'a> {
    pub name: &'static str,
    pub value: Option<&'a str>,
    pub checks: &'static [Check],
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: Option<&'a str>, checks: &'static [Check]) -> Self {
        Self {
            name,
            value,
            checks,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let value = self.value.unwrap_or_default();

        if value.is_empty() {
            return if self.checks.contains(&Check::Required) {
                Err(ValidationError::Required { field: self.name })
            } else {
                Ok(())
            };
        }

        for check in self.checks {
            match *check {
                Check::Required => {}
                Check::MinChars(min) => {
                    if value.chars().count() < min {
                        return Err(ValidationError::TooShort {
                            field: self.name,
                            min,
                        });
                    }
                }
                Check::Email => {
                    if !EmailAddress::is_valid(value) {
                        return Err(ValidationError::InvalidEmail { field: self.name });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Request bodies that describe their own constraints.
pub trait Validate {
    fn fields(&self) -> Vec<Field<'_>>;

    /// Run every field in declaration order and stop at the first failure.
    fn validate(&self) -> Result<(), ValidationError> {
        self.fields().iter().try_for_each(Field::validate)
    }
}
