use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::UserProfile;
use crate::inbound::http::router::AppState;

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ListUsersResponseData>, ApiError> {
    let users: Vec<UserData> = state
        .user_service
        .list_users()
        .await?
        .into_iter()
        .map(|user| UserProfile::from(user).into())
        .collect();

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListUsersResponseData {
            total: users.len(),
            users,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListUsersResponseData {
    pub users: Vec<UserData>,
    pub total: usize,
}
