use tonic::Status;

use crate::domain::user::models::UserProfile;
use crate::domain::user::ports::UserServicePort;
use crate::proto::GetAllUsersResponse;

pub async fn get_all_users(service: &dyn UserServicePort) -> Result<GetAllUsersResponse, Status> {
    let users: Vec<crate::proto::User> = service
        .list_users()
        .await?
        .into_iter()
        .map(|user| UserProfile::from(user).into())
        .collect();

    Ok(GetAllUsersResponse {
        total: users.len() as i64,
        users,
    })
}
