use tonic::Status;

use super::parse_user_id;
use crate::domain::user::ports::UserServicePort;
use crate::proto::DeleteUserRequest;
use crate::proto::DeleteUserResponse;

pub async fn delete_user(
    service: &dyn UserServicePort,
    request: DeleteUserRequest,
) -> Result<DeleteUserResponse, Status> {
    let user_id = parse_user_id(&request.user_id)?;
    service.delete_user(&user_id).await?;

    Ok(DeleteUserResponse { success: true })
}
