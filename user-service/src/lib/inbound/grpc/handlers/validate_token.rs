use tonic::Status;

use crate::domain::authentication::ports::AuthServicePort;
use crate::proto::ValidateTokenRequest;
use crate::proto::ValidateTokenResponse;

pub async fn validate_token(
    service: &dyn AuthServicePort,
    request: ValidateTokenRequest,
) -> Result<ValidateTokenResponse, Status> {
    let profile = service.validate_token(&request.token).await?;

    Ok(ValidateTokenResponse {
        user: Some(profile.into()),
    })
}
