use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// In-process user store.
///
/// Both maps live behind one lock so the email index can never drift from the
/// user table; `create` checks and inserts under the same write guard.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, User>,
    emails: HashMap<String, UserId>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut tables = self.state.write().await;

        if tables.emails.contains_key(&user.email) {
            return Err(UserError::AlreadyExists(user.email));
        }

        tables.emails.insert(user.email.clone(), user.id);
        tables.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.state.read().await.users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let tables = self.state.read().await;

        Ok(tables
            .emails
            .get(email)
            .and_then(|id| tables.users.get(id))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let mut users: Vec<User> = self.state.read().await.users.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(users)
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut tables = self.state.write().await;

        let previous_email = match tables.users.get(&user.id) {
            Some(existing) => existing.email.clone(),
            None => return Err(UserError::NotFound(user.id.to_string())),
        };

        if previous_email != user.email {
            if tables.emails.contains_key(&user.email) {
                return Err(UserError::AlreadyExists(user.email));
            }
            tables.emails.remove(&previous_email);
            tables.emails.insert(user.email.clone(), user.id);
        }

        tables.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut tables = self.state.write().await;

        let user = tables
            .users
            .remove(id)
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;
        tables.emails.remove(&user.email);

        Ok(())
    }

    async fn count(&self) -> Result<u64, UserError> {
        Ok(self.state.read().await.users.len() as u64)
    }
}
