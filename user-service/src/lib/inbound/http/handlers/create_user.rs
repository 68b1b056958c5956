use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UserProfile;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::Check;
use crate::inbound::http::validation::Field;
use crate::inbound::http::validation::Validate;

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    body.validate()?;

    state
        .user_service
        .create_user(CreateUserCommand::new(body.name, body.email, body.password))
        .await
        .map_err(ApiError::from)
        .map(|user| ApiSuccess::new(StatusCode::CREATED, UserProfile::from(user).into()))
}

/// HTTP request body for creating a user (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    name: String,
    email: String,
    password: String,
}

impl Validate for CreateUserRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new(
                "name",
                Some(self.name.as_str()),
                &[Check::Required, Check::MinChars(2)],
            ),
            Field::new(
                "email",
                Some(self.email.as_str()),
                &[Check::Required, Check::Email],
            ),
            Field::new(
                "password",
                Some(self.password.as_str()),
                &[Check::Required, Check::MinChars(6)],
            ),
        ]
    }
}
