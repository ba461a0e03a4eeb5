use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use shopfront_core::{AppError, PaginationParams};
use shopfront_models::{CreateProductDto, PaginatedProductsResponse, ProductResponse};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::ProductService;

/// Create a product in an existing category
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation error, duplicate name or unknown category", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Products",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_product(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateProductDto>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let product = ProductService::create_product(
        state.products.as_ref(),
        state.categories.as_ref(),
        dto,
        auth_user.user(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// List products with their owner and category
#[utoipa::path(
    get,
    path = "/api/products",
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of products", body = PaginatedProductsResponse),
        (status = 400, description = "Invalid page or limit", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Products"
)]
#[instrument(skip(state, params))]
pub async fn get_products(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<PaginatedProductsResponse>, AppError> {
    let Query(params) = params
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Invalid query parameters: {}", e)))?;
    let pagination = params.validate()?;

    let products = ProductService::get_products(state.products.as_ref(), pagination).await?;
    Ok(Json(products))
}
