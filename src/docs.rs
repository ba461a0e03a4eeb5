use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use shopfront_core::{PageMeta, PaginationParams};
use shopfront_models::{
    AuthResponse, CategoryRefResponse, CategoryResponse, CreateCategoryDto, CreateProductDto,
    LoginUserDto, MessageResponse, PaginatedCategoriesResponse, PaginatedProductsResponse,
    PopulatedProductResponse, ProductResponse, RegisterUserDto, UserRefResponse, UserResponse,
    UserRole,
};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::health,
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::validate_email,
        crate::modules::categories::controller::create_category,
        crate::modules::categories::controller::get_categories,
        crate::modules::products::controller::create_product,
        crate::modules::products::controller::get_products,
    ),
    components(
        schemas(
            UserRole,
            UserResponse,
            RegisterUserDto,
            LoginUserDto,
            AuthResponse,
            MessageResponse,
            CreateCategoryDto,
            CategoryResponse,
            PaginatedCategoriesResponse,
            CreateProductDto,
            ProductResponse,
            UserRefResponse,
            CategoryRefResponse,
            PopulatedProductResponse,
            PaginatedProductsResponse,
            PageMeta,
            PaginationParams,
            ErrorResponse,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and email validation"),
        (name = "Categories", description = "Product categories"),
        (name = "Products", description = "Product catalogue"),
        (name = "Operations", description = "Health checks")
    ),
    info(
        title = "Shopfront API",
        version = "0.1.0",
        description = "E-commerce REST backend built with Rust, Axum and MongoDB, with JWT authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/auth/register",
            "/api/auth/login",
            "/api/auth/validate-email/{token}",
            "/api/categories",
            "/api/products",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
