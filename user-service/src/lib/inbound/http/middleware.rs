use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::UserProfile;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Profile of the caller, attached to the request by [`authenticate`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserProfile);

/// Middleware that resolves the Bearer token to a live user and adds the
/// profile to request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).map_err(IntoResponse::into_response)?;

    let profile = state
        .auth_service
        .validate_token(token)
        .await
        .map_err(|err| {
            match &err {
                UserError::InvalidToken => tracing::warn!("Rejected invalid or expired token"),
                UserError::NotFound(user_id) => {
                    tracing::warn!(user_id = %user_id, "Token subject no longer exists")
                }
                other => tracing::error!(error = %other, "Token validation failed"),
            }
            match err {
                UserError::InvalidToken | UserError::NotFound(_) => {
                    ApiError::Unauthorized("Invalid or expired token".to_string())
                }
                other => ApiError::from(other),
            }
            .into_response()
        })?;

    req.extensions_mut().insert(AuthenticatedUser(profile));

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, ApiError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let header_value = header_value
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    match header_value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )),
    }
}
