//! Product documents, DTOs and the populated list shape.
//!
//! Listing expands the `user` and `category` references into small
//! summaries ([`UserRef`], [`CategoryRef`]). A reference whose target no
//! longer exists is rendered as `null`.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use shopfront_core::PageMeta;
use utoipa::ToSchema;
use validator::Validate;

use crate::ids::validate_object_id;

/// A product as stored in the `products` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub user: ObjectId,
    pub category: ObjectId,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub available: bool,
    pub price: f64,
    pub description: Option<String>,
    pub user: ObjectId,
    pub category: ObjectId,
}

impl From<NewProduct> for Product {
    fn from(new: NewProduct) -> Self {
        Self {
            id: ObjectId::new(),
            name: new.name,
            available: new.available,
            price: new.price,
            description: new.description,
            user: new.user,
            category: new.category,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductDto {
    #[validate(length(min = 1, message = "Missing name"))]
    #[schema(example = "The Rust Programming Language")]
    pub name: String,
    #[serde(default)]
    pub available: Option<bool>,
    #[validate(range(min = 0.0, message = "Price must be a positive number"))]
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    /// Category id (ObjectId hex)
    #[validate(custom(function = "validate_object_id", message = "Invalid category id"))]
    #[schema(example = "65f1c0ffee0000000000abcd")]
    pub category: String,
}

/// Created product as returned by `POST /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub available: bool,
    pub price: f64,
    pub description: Option<String>,
    /// Owner user id
    pub user: String,
    /// Category id
    pub category: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_hex(),
            name: product.name,
            available: product.available,
            price: product.price,
            description: product.description,
            user: product.user.to_hex(),
            category: product.category.to_hex(),
        }
    }
}

/// Owner summary embedded in listed products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserRef {
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
}

/// Category summary embedded in listed products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryRef {
    #[serde(rename = "_id")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub name: String,
}

/// Product with its references resolved, as read from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulatedProduct {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserRefResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryRefResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PopulatedProductResponse {
    pub id: String,
    pub name: String,
    pub available: bool,
    pub price: f64,
    pub description: Option<String>,
    pub user: Option<UserRefResponse>,
    pub category: Option<CategoryRefResponse>,
}

impl From<PopulatedProduct> for PopulatedProductResponse {
    fn from(product: PopulatedProduct) -> Self {
        Self {
            id: product.id.to_hex(),
            name: product.name,
            available: product.available,
            price: product.price,
            description: product.description,
            user: product.user.map(|u| UserRefResponse {
                id: u.id.to_hex(),
                name: u.name,
                email: u.email,
            }),
            category: product.category.map(|c| CategoryRefResponse {
                id: c.id.to_hex(),
                name: c.name,
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedProductsResponse {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub products: Vec<PopulatedProductResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(category: &str, price: Option<f64>) -> CreateProductDto {
        CreateProductDto {
            name: "Widget".to_string(),
            available: None,
            price,
            description: None,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_create_dto_valid() {
        assert!(dto(&ObjectId::new().to_hex(), Some(9.5)).validate().is_ok());
    }

    #[test]
    fn test_create_dto_rejects_bad_category() {
        let errors = dto("nope", None).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("category"));
    }

    #[test]
    fn test_create_dto_rejects_negative_price() {
        let errors = dto(&ObjectId::new().to_hex(), Some(-1.0))
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_populated_product_reads_unwound_lookup() {
        let user_id = ObjectId::new();
        let doc = bson::doc! {
            "_id": ObjectId::new(),
            "name": "Widget",
            "available": true,
            "price": 3.5,
            "user": { "_id": user_id, "name": "Ada", "email": "ada@example.com" },
        };
        let product: PopulatedProduct = bson::from_document(doc).unwrap();
        assert_eq!(product.user.as_ref().map(|u| u.id), Some(user_id));
        assert!(product.category.is_none());

        let response = PopulatedProductResponse::from(product);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["user"]["id"], user_id.to_hex());
        assert!(json["category"].is_null());
    }

    #[test]
    fn test_product_response_ids_are_strings() {
        let product: Product = NewProduct {
            name: "Widget".to_string(),
            available: false,
            price: 0.0,
            description: None,
            user: ObjectId::new(),
            category: ObjectId::new(),
        }
        .into();
        let category = product.category.to_hex();
        let json = serde_json::to_value(ProductResponse::from(product)).unwrap();
        assert_eq!(json["category"], category);
    }
}
