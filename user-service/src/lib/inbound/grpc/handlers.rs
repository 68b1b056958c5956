use tonic::Status;

use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::user::errors::UserError;

pub mod create_user;
pub mod delete_user;
pub mod get_all_users;
pub mod get_user;
pub mod login;
pub mod register;
pub mod update_user;
pub mod validate_token;

impl From<UserProfile> for crate::proto::User {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            name: profile.name,
            email: profile.email,
            created_at: profile.created_at.to_rfc3339(),
        }
    }
}

impl From<UserError> for Status {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => Status::not_found(err.to_string()),
            UserError::AlreadyExists(_) => Status::already_exists(err.to_string()),
            UserError::InvalidCredentials | UserError::InvalidToken => {
                Status::unauthenticated(err.to_string())
            }
            UserError::InvalidUserId(_)
            | UserError::InvalidUserData(_)
            | UserError::EmptyPassword => Status::invalid_argument(err.to_string()),
            UserError::InvalidSecret
            | UserError::HashingFailed(_)
            | UserError::TokenIssueFailed(_)
            | UserError::DatabaseError(_) => {
                tracing::error!(error = %err, "gRPC request failed");
                Status::internal("Internal server error")
            }
        }
    }
}

pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Status> {
    UserId::from_string(raw).map_err(|e| Status::from(UserError::from(e)))
}
