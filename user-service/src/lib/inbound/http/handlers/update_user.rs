use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::inbound::http::router::AppState;
use crate::inbound::http::validation::Check;
use crate::inbound::http::validation::Field;
use crate::inbound::http::validation::Validate;
use crate::user::errors::UserError;

/// HTTP request body for updating a user. Absent or empty fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Validate for UpdateUserRequest {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("name", self.name.as_deref(), &[Check::MinChars(2)]),
            Field::new("email", self.email.as_deref(), &[Check::Email]),
        ]
    }
}

impl From<UpdateUserRequest> for UpdateUserCommand {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
        }
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let user_id = UserId::from_string(&id).map_err(UserError::from)?;
    req.validate()?;

    state
        .user_service
        .update_user(&user_id, req.into())
        .await
        .map_err(ApiError::from)
        .map(|user| ApiSuccess::new(StatusCode::OK, UserProfile::from(user).into()))
}
