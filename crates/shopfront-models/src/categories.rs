//! Category documents, DTOs and list response.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use shopfront_core::PageMeta;
use utoipa::ToSchema;
use validator::Validate;

/// A category as stored in the `categories` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub available: bool,
    /// Creating user
    pub user: ObjectId,
}

/// Fields needed to insert a category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub available: bool,
    pub user: ObjectId,
}

impl From<NewCategory> for Category {
    fn from(new: NewCategory) -> Self {
        Self {
            id: ObjectId::new(),
            name: new.name,
            available: new.available,
            user: new.user,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, message = "Missing name"))]
    #[schema(example = "Books")]
    pub name: String,
    #[serde(default)]
    pub available: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub available: bool,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_hex(),
            name: category.name,
            available: category.available,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedCategoriesResponse {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub categories: Vec<CategoryResponse>,
}
