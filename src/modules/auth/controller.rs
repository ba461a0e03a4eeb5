use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use shopfront_core::AppError;
use shopfront_models::{AuthResponse, LoginUserDto, MessageResponse, RegisterUserDto};
use tracing::instrument;
use utoipa::ToSchema;

use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered, validation email queued", body = AuthResponse),
        (status = 400, description = "Validation error or email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterUserDto>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let response =
        AuthService::register_user(state.users.as_ref(), &state.jwt, &state.email, dto).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login and receive a JWT
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginUserDto,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Validation error or invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginUserDto>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = AuthService::login_user(state.users.as_ref(), &state.jwt, dto).await?;
    Ok(Json(response))
}

/// Confirm an email address from the link sent at registration
#[utoipa::path(
    get,
    path = "/api/auth/validate-email/{token}",
    params(
        ("token" = String, Path, description = "Email validation token")
    ),
    responses(
        (status = 200, description = "Email validated", body = MessageResponse),
        (status = 400, description = "No user with this email", body = ErrorResponse),
        (status = 401, description = "Invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, token))]
pub async fn validate_email(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    AuthService::validate_email(state.users.as_ref(), &state.jwt, &token).await?;
    Ok(Json(MessageResponse::new("Email validated")))
}
