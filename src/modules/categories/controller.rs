use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use shopfront_core::{AppError, PaginationParams};
use shopfront_models::{CategoryResponse, CreateCategoryDto, PaginatedCategoriesResponse};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::CategoryService;

/// Create a category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Validation error or category already exists", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Categories",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_category(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<CategoryResponse>), AppError> {
    let category =
        CategoryService::create_category(state.categories.as_ref(), dto, auth_user.user()).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// List categories, one page at a time
#[utoipa::path(
    get,
    path = "/api/categories",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of categories", body = PaginatedCategoriesResponse),
        (status = 400, description = "Invalid page or limit", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Categories"
)]
#[instrument(skip(state, params))]
pub async fn get_categories(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<PaginatedCategoriesResponse>, AppError> {
    let Query(params) = params
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Invalid query parameters: {}", e)))?;
    let pagination = params.validate()?;

    let categories = CategoryService::get_categories(state.categories.as_ref(), pagination).await?;
    Ok(Json(categories))
}
