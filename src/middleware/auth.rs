use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use shopfront_auth::UserTokenPayload;
use shopfront_core::AppError;
use shopfront_db::DbError;
use shopfront_models::{User, ids::parse_object_id};

use crate::state::AppState;

/// The authenticated caller, loaded from storage.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    pub fn user(&self) -> &User {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("No token provided".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Bearer token".to_string()))?;

        let payload: UserTokenPayload = state
            .jwt
            .validate_token(token)
            .ok_or_else(|| AppError::unauthorized("Invalid token".to_string()))?;

        let user_id = parse_object_id(&payload.id)
            .ok_or_else(|| AppError::unauthorized("Invalid token".to_string()))?;

        let user = state
            .users
            .find_by_id(user_id)
            .await
            .map_err(DbError::into_app_error)?
            .ok_or_else(|| AppError::unauthorized("Invalid token - User".to_string()))?;

        Ok(AuthUser(user))
    }
}
