#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::JwtHandler;
use auth::TokenConfig;
use serde_json::json;
use serde_json::Value;
use user_service::domain::authentication::ports::AuthServicePort;
use user_service::domain::authentication::service::AuthService;
use user_service::domain::user::ports::UserServicePort;
use user_service::domain::user::service::UserService;
use user_service::inbound::http::router::create_router;
use user_service::outbound::repositories::InMemoryUserRepository;
use user_service::shutdown;
use user_service::shutdown::ShutdownTrigger;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Domain services wired to a fresh in-memory repository.
pub struct TestServices {
    pub repository: Arc<InMemoryUserRepository>,
    pub user_service: Arc<dyn UserServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
}

impl TestServices {
    pub fn new(secret: &str) -> Self {
        let repository = Arc::new(InMemoryUserRepository::new());
        let authenticator = Arc::new(Authenticator::new(&TokenConfig::with_default_lifetime(
            secret,
        )));

        Self {
            user_service: Arc::new(UserService::new(Arc::clone(&repository))),
            auth_service: Arc::new(AuthService::new(Arc::clone(&repository), authenticator)),
            repository,
        }
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub services: TestServices,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub shutdown: ShutdownTrigger,
    pub server: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with_secret(TEST_SECRET).await
    }

    pub async fn spawn_with_secret(secret: &str) -> Self {
        let services = TestServices::new(secret);

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(
            Arc::clone(&services.user_service),
            Arc::clone(&services.auth_service),
            Duration::from_secs(5),
        );

        let (shutdown, signal) = shutdown::channel();
        let server = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(signal.recv())
                .await
                .expect("Server error");
        });

        Self {
            address,
            services,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(secret.as_bytes()),
            shutdown,
            server,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register an account and return its id.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/register")
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_str().unwrap().to_string()
    }

    /// Log in and return the issued token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"].as_str().unwrap().to_string()
    }

    /// Register then log in; returns `(id, token)`.
    pub async fn signed_in_user(&self, name: &str, email: &str) -> (String, String) {
        let id = self.register(name, email, "password123").await;
        let token = self.login(email, "password123").await;
        (id, token)
    }
}
