use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        // Fast path only; the repository's own uniqueness check is authoritative.
        if let Ok(Some(_)) = self.repository.find_by_email(&command.email).await {
            return Err(UserError::AlreadyExists(command.email));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;
        let user = User::new(command.name, command.email, password_hash)?;

        self.repository.create(user).await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        if let Some(new_name) = command.name.filter(|name| !name.is_empty()) {
            user.update_name(new_name);
        }

        if let Some(new_email) = command.email.filter(|email| !email.is_empty()) {
            if let Ok(Some(existing)) = self.repository.find_by_email(&new_email).await {
                if existing.id != *id {
                    return Err(UserError::AlreadyExists(new_email));
                }
            }
            user.update_email(new_email);
        }

        self.repository.update(user).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await
    }

    async fn count_users(&self) -> Result<u64, UserError> {
        self.repository.count().await
    }
}
