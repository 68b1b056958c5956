use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::models::RegisterCommand;
use crate::domain::authentication::models::Registration;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::Check;
use crate::inbound::http::validation::Field;
use crate::inbound::http::validation::Validate;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    body.validate()?;

    state
        .auth_service
        .register(body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|registration| ApiSuccess::new(StatusCode::CREATED, registration.into()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

impl Validate for RegisterRequest {
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

impl RegisterRequest {
    fn into_command(self) -> RegisterCommand {
        RegisterCommand::new(self.name, self.email, self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub id: String,
    pub message: String,
}

impl From<Registration> for RegisterResponseData {
    fn from(registration: Registration) -> Self {
        Self {
            id: registration.id.to_string(),
            message: registration.message,
        }
    }
}
