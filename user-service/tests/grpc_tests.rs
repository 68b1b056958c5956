mod common;

use common::TestServices;
use common::TEST_SECRET;
use tonic::Code;
use tonic::Request;
use user_service::inbound::grpc::AuthGrpcService;
use user_service::inbound::grpc::UserGrpcService;
use user_service::proto::auth_service_server::AuthService;
use user_service::proto::user_service_server::UserService;
use user_service::proto::CreateUserRequest;
use user_service::proto::DeleteUserRequest;
use user_service::proto::GetAllUsersRequest;
use user_service::proto::GetUserRequest;
use user_service::proto::LoginRequest;
use user_service::proto::RegisterRequest;
use user_service::proto::UpdateUserRequest;
use user_service::proto::ValidateTokenRequest;

struct GrpcHarness {
    users: UserGrpcService,
    auth: AuthGrpcService,
}

impl GrpcHarness {
    fn new() -> Self {
        let services = TestServices::new(TEST_SECRET);
        Self {
            users: UserGrpcService::new(services.user_service),
            auth: AuthGrpcService::new(services.auth_service),
        }
    }

    async fn create(&self, name: &str, email: &str) -> String {
        self.users
            .create_user(Request::new(CreateUserRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: "password123".to_string(),
            }))
            .await
            .expect("create should succeed")
            .into_inner()
            .user
            .expect("user should be present")
            .id
    }
}

#[tokio::test]
async fn test_user_crud_round() {
    let harness = GrpcHarness::new();
    let id = harness.create("Alice", "alice@example.com").await;

    let fetched = harness
        .users
        .get_user(Request::new(GetUserRequest {
            user_id: id.clone(),
        }))
        .await
        .unwrap()
        .into_inner()
        .user
        .unwrap();
    assert_eq!(fetched.name, "Alice");
    assert!(chrono::DateTime::parse_from_rfc3339(&fetched.created_at).is_ok());

    let updated = harness
        .users
        .update_user(Request::new(UpdateUserRequest {
            user_id: id.clone(),
            name: "Alice Smith".to_string(),
            email: String::new(),
        }))
        .await
        .unwrap()
        .into_inner()
        .user
        .unwrap();
    assert_eq!(updated.name, "Alice Smith");
    assert_eq!(updated.email, "alice@example.com");

    let all = harness
        .users
        .get_all_users(Request::new(GetAllUsersRequest {}))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(all.total, 1);
    assert_eq!(all.users.len(), 1);

    let deleted = harness
        .users
        .delete_user(Request::new(DeleteUserRequest {
            user_id: id.clone(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert!(deleted.success);

    let status = harness
        .users
        .get_user(Request::new(GetUserRequest { user_id: id }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn test_create_duplicate_email() {
    let harness = GrpcHarness::new();
    harness.create("Alice", "alice@example.com").await;

    let status = harness
        .users
        .create_user(Request::new(CreateUserRequest {
            name: "Other".to_string(),
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::AlreadyExists);
}

#[tokio::test]
async fn test_invalid_user_id() {
    let harness = GrpcHarness::new();

    let status = harness
        .users
        .delete_user(Request::new(DeleteUserRequest {
            user_id: "zzz".to_string(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_register_login_validate() {
    let harness = GrpcHarness::new();

    let registration = harness
        .auth
        .register(Request::new(RegisterRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(registration.message, "User registered successfully");

    let login = harness
        .auth
        .login(Request::new(LoginRequest {
            email: "alice@example.com".to_string(),
            password: "password123".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(login.user.as_ref().unwrap().id, registration.id);

    let validated = harness
        .auth
        .validate_token(Request::new(ValidateTokenRequest {
            token: login.token.clone(),
        }))
        .await
        .unwrap()
        .into_inner()
        .user
        .unwrap();
    assert_eq!(validated.id, registration.id);
    assert_eq!(validated.email, "alice@example.com");
}

#[tokio::test]
async fn test_login_wrong_password_unauthenticated() {
    let harness = GrpcHarness::new();
    harness.create("Alice", "alice@example.com").await;

    let status = harness
        .auth
        .login(Request::new(LoginRequest {
            email: "alice@example.com".to_string(),
            password: "nope".to_string(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unauthenticated);
}

#[tokio::test]
async fn test_validate_garbage_token() {
    let harness = GrpcHarness::new();

    let status = harness
        .auth
        .validate_token(Request::new(ValidateTokenRequest {
            token: "garbage".to_string(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unauthenticated);
}
