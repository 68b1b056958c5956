use tonic::Status;

use super::parse_user_id;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::UserProfile;
use crate::domain::user::ports::UserServicePort;
use crate::proto::UpdateUserRequest;
use crate::proto::UpdateUserResponse;

pub async fn update_user(
    service: &dyn UserServicePort,
    request: UpdateUserRequest,
) -> Result<UpdateUserResponse, Status> {
    let user_id = parse_user_id(&request.user_id)?;

    // proto3 strings have no presence; empty means "leave unchanged"
    let command = UpdateUserCommand {
        name: Some(request.name).filter(|name| !name.is_empty()),
        email: Some(request.email).filter(|email| !email.is_empty()),
    };
    let user = service.update_user(&user_id, command).await?;

    Ok(UpdateUserResponse {
        user: Some(UserProfile::from(user).into()),
    })
}
