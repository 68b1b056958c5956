use std::sync::Arc;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::login;
use super::handlers::register;
use super::handlers::validate_token;
use crate::domain::authentication::ports::AuthServicePort;
use crate::proto::auth_service_server::AuthService as AuthServiceProto;
use crate::proto::LoginRequest;
use crate::proto::LoginResponse;
use crate::proto::RegisterRequest;
use crate::proto::RegisterResponse;
use crate::proto::ValidateTokenRequest;
use crate::proto::ValidateTokenResponse;

pub struct AuthGrpcService {
    service: Arc<dyn AuthServicePort>,
}

impl AuthGrpcService {
    pub fn new(service: Arc<dyn AuthServicePort>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl AuthServiceProto for AuthGrpcService {
    async fn register(
        &self,
        request: Request<RegisterRequest>,
    ) -> Result<Response<RegisterResponse>, Status> {
        let response = register::register(self.service.as_ref(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let response = login::login(self.service.as_ref(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn validate_token(
        &self,
        request: Request<ValidateTokenRequest>,
    ) -> Result<Response<ValidateTokenResponse>, Status> {
        let response =
            validate_token::validate_token(self.service.as_ref(), request.into_inner()).await?;
        Ok(Response::new(response))
    }
}
