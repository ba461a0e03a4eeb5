//! Repository traits.
//!
//! Listing methods take a raw `skip`/`limit` pair and return documents in
//! natural insertion order.

use async_trait::async_trait;
use bson::oid::ObjectId;
use shopfront_models::{Category, NewCategory, NewProduct, PopulatedProduct, Product, User};

use crate::error::DbResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> DbResult<Option<User>>;

    async fn find_by_id(&self, id: ObjectId) -> DbResult<Option<User>>;

    /// Inserts a fully built user. Fails with `Duplicate` on a taken email.
    async fn create(&self, user: User) -> DbResult<User>;

    /// Sets `emailValidated`. Returns false when no user has that email.
    async fn mark_email_validated(&self, email: &str) -> DbResult<bool>;

    async fn insert_many(&self, users: Vec<User>) -> DbResult<()>;

    async fn delete_all(&self) -> DbResult<u64>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn exists_by_name(&self, name: &str) -> DbResult<bool>;

    async fn find_by_id(&self, id: ObjectId) -> DbResult<Option<Category>>;

    async fn create(&self, category: NewCategory) -> DbResult<Category>;

    async fn count(&self) -> DbResult<u64>;

    async fn list(&self, skip: u64, limit: u64) -> DbResult<Vec<Category>>;

    async fn insert_many(&self, categories: Vec<Category>) -> DbResult<()>;

    async fn delete_all(&self) -> DbResult<u64>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn exists_by_name(&self, name: &str) -> DbResult<bool>;

    async fn create(&self, product: NewProduct) -> DbResult<Product>;

    async fn count(&self) -> DbResult<u64>;

    /// Page of products with `user` and `category` expanded.
    async fn list_populated(&self, skip: u64, limit: u64) -> DbResult<Vec<PopulatedProduct>>;

    async fn insert_many(&self, products: Vec<Product>) -> DbResult<()>;

    async fn delete_all(&self) -> DbResult<u64>;
}
