use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::LoginSession;
use crate::domain::authentication::models::RegisterCommand;
use crate::domain::authentication::models::Registration;
use crate::domain::authentication::models::REGISTRATION_MESSAGE;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::authentication::token::TokenAuthority;
use crate::domain::user::models::User;
use crate::domain::user::models::UserProfile;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Authentication facade over the repository, password hashing and tokens.
///
/// Holds no mutable state; concurrent callers are not coordinated.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    tokens: TokenAuthority<UR>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token signing, configured at startup
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            tokens: TokenAuthority::new(Arc::clone(&authenticator), Arc::clone(&repository)),
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Registration, UserError> {
        // A failed lookup counts as "not found"; create() still enforces uniqueness.
        if let Ok(Some(_)) = self.repository.find_by_email(&command.email).await {
            return Err(UserError::AlreadyExists(command.email));
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;
        let user = User::new(command.name, command.email, password_hash)?;

        let created = self.repository.create(user).await?;

        Ok(Registration {
            id: created.id,
            message: REGISTRATION_MESSAGE.to_string(),
        })
    }

    async fn login(&self, command: LoginCommand) -> Result<LoginSession, UserError> {
        let user = match self.repository.find_by_email(&command.email).await {
            Ok(Some(user)) => user,
            _ => return Err(UserError::InvalidCredentials),
        };

        self.authenticator
            .verify_password(&command.password, &user.password_hash)
            .map_err(|_| UserError::InvalidCredentials)?;

        let token = self.tokens.issue(&user)?;

        Ok(LoginSession {
            token,
            user: user.into(),
        })
    }

    async fn validate_token(&self, token: &str) -> Result<UserProfile, UserError> {
        self.tokens.validate(token).await.map(UserProfile::from)
    }
}

#[cfg(test)]
mod tests {
    use auth::TokenConfig;

    use super::*;
    use crate::domain::user::service::tests::sample_user;
    use crate::domain::user::service::tests::MockTestUserRepository;

    const SECRET: &str = "auth-service-test-secret-at-least-32!";

    fn authenticator(secret: &str) -> Arc<Authenticator> {
        Arc::new(Authenticator::new(&TokenConfig::with_default_lifetime(secret)))
    }

    fn stored_user(email: &str, password: &str) -> User {
        let mut user = sample_user("Alice", email);
        user.password_hash = authenticator(SECRET).hash_password(password).unwrap();
        user
    }

    fn register_command(email: &str, password: &str) -> RegisterCommand {
        RegisterCommand::new("Alice".to_string(), email.to_string(), password.to_string())
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|user| user.email == "alice@x.com" && user.password_hash.starts_with("$argon2"))
            .times(1)
            .returning(|user| Ok(user));

        let service = AuthService::new(Arc::new(repository), authenticator(SECRET));

        let registration = service
            .register(register_command("alice@x.com", "secret1"))
            .await
            .unwrap();
        assert_eq!(registration.message, REGISTRATION_MESSAGE);
    }

    #[tokio::test]
    async fn test_register_existing_email() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|email| Ok(Some(sample_user("Alice", email))));
        repository.expect_create().times(0);

        let service = AuthService::new(Arc::new(repository), authenticator(SECRET));

        let result = service
            .register(register_command("alice@x.com", "secret2"))
            .await;
        assert!(matches!(result, Err(UserError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_register_lookup_error_treated_as_absent() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(UserError::DatabaseError("timeout".to_string())));
        repository
            .expect_create()
            .times(1)
            .returning(|user| Ok(user));

        let service = AuthService::new(Arc::new(repository), authenticator(SECRET));

        assert!(service
            .register(register_command("alice@x.com", "secret1"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_register_lost_race_reports_storage_conflict() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .times(1)
            .returning(|user| Err(UserError::AlreadyExists(user.email)));

        let service = AuthService::new(Arc::new(repository), authenticator(SECRET));

        let result = service
            .register(register_command("alice@x.com", "secret1"))
            .await;
        assert_eq!(
            result.unwrap_err(),
            UserError::AlreadyExists("alice@x.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_register_empty_password() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_create().times(0);

        let service = AuthService::new(Arc::new(repository), authenticator(SECRET));

        let result = service.register(register_command("alice@x.com", "")).await;
        assert_eq!(result.unwrap_err(), UserError::EmptyPassword);
    }

    #[tokio::test]
    async fn test_register_missing_name() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_create().times(0);

        let service = AuthService::new(Arc::new(repository), authenticator(SECRET));

        let command = RegisterCommand::new(
            String::new(),
            "alice@x.com".to_string(),
            "secret1".to_string(),
        );
        let result = service.register(command).await;
        assert!(matches!(result, Err(UserError::InvalidUserData(_))));
    }

    #[tokio::test]
    async fn test_register_storage_failure_propagates() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .times(1)
            .returning(|_| Err(UserError::DatabaseError("disk full".to_string())));

        let service = AuthService::new(Arc::new(repository), authenticator(SECRET));

        let result = service
            .register(register_command("alice@x.com", "secret1"))
            .await;
        assert_eq!(
            result.unwrap_err(),
            UserError::DatabaseError("disk full".to_string())
        );
    }

    #[tokio::test]
    async fn test_login_success() {
        let user = stored_user("alice@x.com", "secret1");
        let expected_profile = UserProfile::from(&user);

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(repository), authenticator(SECRET));

        let session = service
            .login(LoginCommand::new(
                "alice@x.com".to_string(),
                "secret1".to_string(),
            ))
            .await
            .unwrap();
        assert!(!session.token.is_empty());
        assert_eq!(session.user, expected_profile);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let user = stored_user("alice@x.com", "secret1");

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .returning(move |email| {
                if email == "alice@x.com" {
                    Ok(Some(user.clone()))
                } else {
                    Ok(None)
                }
            });

        let service = AuthService::new(Arc::new(repository), authenticator(SECRET));

        let wrong_password = service
            .login(LoginCommand::new(
                "alice@x.com".to_string(),
                "wrong".to_string(),
            ))
            .await
            .unwrap_err();
        let unknown_email = service
            .login(LoginCommand::new(
                "nobody@x.com".to_string(),
                "whatever".to_string(),
            ))
            .await
            .unwrap_err();

        assert_eq!(wrong_password, UserError::InvalidCredentials);
        assert_eq!(wrong_password, unknown_email);
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_login_lookup_error_is_invalid_credentials() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(UserError::DatabaseError("timeout".to_string())));

        let service = AuthService::new(Arc::new(repository), authenticator(SECRET));

        let result = service
            .login(LoginCommand::new(
                "alice@x.com".to_string(),
                "secret1".to_string(),
            ))
            .await;
        assert_eq!(result.unwrap_err(), UserError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_login_without_secret() {
        let user = stored_user("alice@x.com", "secret1");

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(repository), authenticator(""));

        let result = service
            .login(LoginCommand::new(
                "alice@x.com".to_string(),
                "secret1".to_string(),
            ))
            .await;
        assert_eq!(result.unwrap_err(), UserError::InvalidSecret);
    }

    #[tokio::test]
    async fn test_validate_token_is_idempotent() {
        let user = stored_user("alice@x.com", "secret1");
        let lookup = user.clone();

        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        repository
            .expect_find_by_id()
            .times(2)
            .returning(move |_| Ok(Some(lookup.clone())));

        let service = AuthService::new(Arc::new(repository), authenticator(SECRET));

        let session = service
            .login(LoginCommand::new(
                "alice@x.com".to_string(),
                "secret1".to_string(),
            ))
            .await
            .unwrap();

        let first = service.validate_token(&session.token).await.unwrap();
        let second = service.validate_token(&session.token).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first, session.user);
    }
}
