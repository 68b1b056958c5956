use std::sync::Arc;

use tonic::Request;
use tonic::Response;
use tonic::Status;

use super::handlers::create_user;
use super::handlers::delete_user;
use super::handlers::get_all_users;
use super::handlers::get_user;
use super::handlers::update_user;
use crate::domain::user::ports::UserServicePort;
use crate::proto::user_service_server::UserService as UserServiceProto;
use crate::proto::CreateUserRequest;
use crate::proto::CreateUserResponse;
use crate::proto::DeleteUserRequest;
use crate::proto::DeleteUserResponse;
use crate::proto::GetAllUsersRequest;
use crate::proto::GetAllUsersResponse;
use crate::proto::GetUserRequest;
use crate::proto::GetUserResponse;
use crate::proto::UpdateUserRequest;
use crate::proto::UpdateUserResponse;

pub struct UserGrpcService {
    service: Arc<dyn UserServicePort>,
}

impl UserGrpcService {
    pub fn new(service: Arc<dyn UserServicePort>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl UserServiceProto for UserGrpcService {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        let response = create_user::create_user(self.service.as_ref(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, Status> {
        let response = get_user::get_user(self.service.as_ref(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn get_all_users(
        &self,
        _request: Request<GetAllUsersRequest>,
    ) -> Result<Response<GetAllUsersResponse>, Status> {
        let response = get_all_users::get_all_users(self.service.as_ref()).await?;
        Ok(Response::new(response))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UpdateUserResponse>, Status> {
        let response = update_user::update_user(self.service.as_ref(), request.into_inner()).await?;
        Ok(Response::new(response))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        let response = delete_user::delete_user(self.service.as_ref(), request.into_inner()).await?;
        Ok(Response::new(response))
    }
}
