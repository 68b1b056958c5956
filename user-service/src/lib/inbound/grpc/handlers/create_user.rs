use tonic::Status;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UserProfile;
use crate::domain::user::ports::UserServicePort;
use crate::proto::CreateUserRequest;
use crate::proto::CreateUserResponse;

pub async fn create_user(
    service: &dyn UserServicePort,
    request: CreateUserRequest,
) -> Result<CreateUserResponse, Status> {
    let command = CreateUserCommand::new(request.name, request.email, request.password);
    let user = service.create_user(command).await?;

    Ok(CreateUserResponse {
        user: Some(UserProfile::from(user).into()),
    })
}
