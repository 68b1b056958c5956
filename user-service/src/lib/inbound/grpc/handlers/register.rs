use tonic::Status;

use crate::domain::authentication::models::RegisterCommand;
use crate::domain::authentication::ports::AuthServicePort;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;

pub async fn register(
    service: &dyn AuthServicePort,
    request: RegisterRequest,
) -> Result<RegisterResponse, Status> {
    let command = RegisterCommand::new(request.name, request.email, request.password);
    let registration = service.register(command).await?;

    Ok(RegisterResponse {
        id: registration.id.to_string(),
        message: registration.message,
    })
}
