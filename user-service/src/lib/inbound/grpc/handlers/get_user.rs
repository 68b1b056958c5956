use tonic::Status;

use super::parse_user_id;
use crate::domain::user::models::UserProfile;
use crate::domain::user::ports::UserServicePort;
use crate::proto::GetUserRequest;
use crate::proto::GetUserResponse;

pub async fn get_user(
    service: &dyn UserServicePort,
    request: GetUserRequest,
) -> Result<GetUserResponse, Status> {
    let user_id = parse_user_id(&request.user_id)?;
    let user = service.get_user(&user_id).await?;

    Ok(GetUserResponse {
        user: Some(UserProfile::from(user).into()),
    })
}
