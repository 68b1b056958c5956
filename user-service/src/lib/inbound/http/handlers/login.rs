use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::models::LoginSession;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::Check;
use crate::inbound::http::validation::Field;
use crate::inbound::http::validation::Validate;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    body.validate()?;

    state
        .auth_service
        .login(LoginCommand::new(body.email, body.password))
        .await
        .map_err(ApiError::from)
        .map(|session| ApiSuccess::new(StatusCode::OK, session.into()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl Validate for LoginRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new(
                "email",
                Some(self.email.as_str()),
                &[Check::Required, Check::Email],
            ),
            Field::new("password", Some(self.password.as_str()), &[Check::Required]),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub user: UserData,
}

impl From<LoginSession> for LoginResponseData {
    fn from(session: LoginSession) -> Self {
        Self {
            token: session.token,
            user: session.user.into(),
        }
    }
}
