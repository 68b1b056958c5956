use tonic::Status;

use crate::domain::authentication::models::LoginCommand;
use crate::domain::authentication::ports::AuthServicePort;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;

pub async fn login(
    service: &dyn AuthServicePort,
    request: LoginRequest,
) -> Result<LoginResponse, Status> {
    let session = service
        .login(LoginCommand::new(request.email, request.password))
        .await?;

    Ok(LoginResponse {
        token: session.token,
        user: Some(session.user.into()),
    })
}
