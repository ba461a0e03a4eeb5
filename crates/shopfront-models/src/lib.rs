//! # Shopfront Models
//!
//! Documents, request DTOs and response shapes for the Shopfront API.
//!
//! Stored documents ([`User`], [`Category`], [`Product`]) keep MongoDB's `_id`
//! as an [`ObjectId`](bson::oid::ObjectId) and are never serialized to clients
//! directly. Every response goes through an explicit `From` conversion into a
//! `*Response` type carrying a string `id`, so neither `_id` nor the password
//! hash can leak.
//!
//! # Modules
//!
//! - [`ids`]: ObjectId parsing and validation helpers
//! - [`auth`]: register/login DTOs and the `{user, token}` response
//! - [`users`]: user document, roles, public user shape
//! - [`categories`]: category document, DTO, paginated list response
//! - [`products`]: product document, DTO, populated list response
//!
//! # Example
//!
//! ```ignore
//! use shopfront_models::users::{User, UserResponse};
//!
//! let user = User::new("Ada", "ada@example.com", hashed_password);
//! let public: UserResponse = user.into();
//! ```

pub mod auth;
pub mod categories;
pub mod ids;
pub mod products;
pub mod users;

pub use auth::{AuthResponse, LoginUserDto, MessageResponse, RegisterUserDto};
pub use categories::{
    Category, CategoryResponse, CreateCategoryDto, NewCategory, PaginatedCategoriesResponse,
};
pub use products::{
    CategoryRef, CategoryRefResponse, CreateProductDto, NewProduct, PaginatedProductsResponse,
    PopulatedProduct, PopulatedProductResponse, Product, ProductResponse, UserRef,
    UserRefResponse,
};
pub use ids::{parse_object_id, validate_object_id};
pub use users::{User, UserResponse, UserRole};
