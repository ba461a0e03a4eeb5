//! In-memory repositories for tests.
//!
//! [`InMemoryDb`] implements all three repository traits over shared vectors.
//! It keeps insertion order and enforces the same unique keys as the MongoDB
//! indexes (`users.email`, `categories.name`, `products.name`).

use async_trait::async_trait;
use bson::oid::ObjectId;
use shopfront_models::{
    Category, CategoryRef, NewCategory, NewProduct, PopulatedProduct, Product, User, UserRef,
};
use tokio::sync::RwLock;

use crate::error::{DbError, DbResult};
use crate::repository::{CategoryRepository, ProductRepository, UserRepository};

#[derive(Debug, Default)]
pub struct InMemoryDb {
    users: RwLock<Vec<User>>,
    categories: RwLock<Vec<Category>>,
    products: RwLock<Vec<Product>>,
}

impl InMemoryDb {
    pub fn new() -> Self {
        Self::default()
    }
}

fn page<T: Clone>(items: &[T], skip: u64, limit: u64) -> Vec<T> {
    items
        .iter()
        .skip(skip as usize)
        .take(limit as usize)
        .cloned()
        .collect()
}

#[async_trait]
impl UserRepository for InMemoryDb {
    async fn find_by_email(&self, email: &str) -> DbResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: ObjectId) -> DbResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: User) -> DbResult<User> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(DbError::Duplicate("Email already exists".to_string()));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn mark_email_validated(&self, email: &str) -> DbResult<bool> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.email == email) {
            Some(user) => {
                user.email_validated = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert_many(&self, new_users: Vec<User>) -> DbResult<()> {
        self.users.write().await.extend(new_users);
        Ok(())
    }

    async fn delete_all(&self) -> DbResult<u64> {
        let mut users = self.users.write().await;
        let count = users.len() as u64;
        users.clear();
        Ok(count)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryDb {
    async fn exists_by_name(&self, name: &str) -> DbResult<bool> {
        let categories = self.categories.read().await;
        Ok(categories.iter().any(|c| c.name == name))
    }

    async fn find_by_id(&self, id: ObjectId) -> DbResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, category: NewCategory) -> DbResult<Category> {
        let mut categories = self.categories.write().await;
        if categories.iter().any(|c| c.name == category.name) {
            return Err(DbError::Duplicate("Category already exists".to_string()));
        }
        let category = Category::from(category);
        categories.push(category.clone());
        Ok(category)
    }

    async fn count(&self) -> DbResult<u64> {
        Ok(self.categories.read().await.len() as u64)
    }

    async fn list(&self, skip: u64, limit: u64) -> DbResult<Vec<Category>> {
        Ok(page(&self.categories.read().await, skip, limit))
    }

    async fn insert_many(&self, new_categories: Vec<Category>) -> DbResult<()> {
        self.categories.write().await.extend(new_categories);
        Ok(())
    }

    async fn delete_all(&self) -> DbResult<u64> {
        let mut categories = self.categories.write().await;
        let count = categories.len() as u64;
        categories.clear();
        Ok(count)
    }
}

#[async_trait]
impl ProductRepository for InMemoryDb {
    async fn exists_by_name(&self, name: &str) -> DbResult<bool> {
        let products = self.products.read().await;
        Ok(products.iter().any(|p| p.name == name))
    }

    async fn create(&self, product: NewProduct) -> DbResult<Product> {
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.name == product.name) {
            return Err(DbError::Duplicate("Product already exists".to_string()));
        }
        let product = Product::from(product);
        products.push(product.clone());
        Ok(product)
    }

    async fn count(&self) -> DbResult<u64> {
        Ok(self.products.read().await.len() as u64)
    }

    async fn list_populated(&self, skip: u64, limit: u64) -> DbResult<Vec<PopulatedProduct>> {
        let products = page(&self.products.read().await, skip, limit);
        let users = self.users.read().await;
        let categories = self.categories.read().await;

        Ok(products
            .into_iter()
            .map(|product| PopulatedProduct {
                user: users.iter().find(|u| u.id == product.user).map(|u| UserRef {
                    id: u.id,
                    name: u.name.clone(),
                    email: u.email.clone(),
                }),
                category: categories
                    .iter()
                    .find(|c| c.id == product.category)
                    .map(|c| CategoryRef {
                        id: c.id,
                        name: c.name.clone(),
                    }),
                id: product.id,
                name: product.name,
                available: product.available,
                price: product.price,
                description: product.description,
            })
            .collect())
    }

    async fn insert_many(&self, new_products: Vec<Product>) -> DbResult<()> {
        self.products.write().await.extend(new_products);
        Ok(())
    }

    async fn delete_all(&self) -> DbResult<u64> {
        let mut products = self.products.write().await;
        let count = products.len() as u64;
        products.clear();
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str, user: ObjectId, category: ObjectId) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            available: true,
            price: 10.0,
            description: None,
            user,
            category,
        }
    }

    #[tokio::test]
    async fn test_user_email_unique() {
        let db = InMemoryDb::new();
        UserRepository::create(&db, User::new("A", "a@example.com", "h"))
            .await
            .unwrap();
        let err = UserRepository::create(&db, User::new("B", "a@example.com", "h"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_category_list_keeps_insertion_order() {
        let db = InMemoryDb::new();
        let owner = ObjectId::new();
        for name in ["a", "b", "c", "d"] {
            CategoryRepository::create(
                &db,
                NewCategory {
                    name: name.to_string(),
                    available: false,
                    user: owner,
                },
            )
            .await
            .unwrap();
        }

        let listed = CategoryRepository::list(&db, 1, 2).await.unwrap();
        let names: Vec<_> = listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
        assert_eq!(CategoryRepository::count(&db).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_list_populated_resolves_and_nulls_refs() {
        let db = InMemoryDb::new();
        let user = UserRepository::create(&db, User::new("Ada", "ada@example.com", "h"))
            .await
            .unwrap();
        let category = CategoryRepository::create(
            &db,
            NewCategory {
                name: "Books".to_string(),
                available: true,
                user: user.id,
            },
        )
        .await
        .unwrap();

        ProductRepository::create(&db, new_product("linked", user.id, category.id))
            .await
            .unwrap();
        ProductRepository::create(&db, new_product("orphan", ObjectId::new(), ObjectId::new()))
            .await
            .unwrap();

        let products = db.list_populated(0, 10).await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].user.as_ref().unwrap().email, "ada@example.com");
        assert_eq!(products[0].category.as_ref().unwrap().name, "Books");
        assert!(products[1].user.is_none());
        assert!(products[1].category.is_none());
    }

    #[tokio::test]
    async fn test_mark_email_validated() {
        let db = InMemoryDb::new();
        UserRepository::create(&db, User::new("Ada", "ada@example.com", "h"))
            .await
            .unwrap();

        assert!(db.mark_email_validated("ada@example.com").await.unwrap());
        assert!(!db.mark_email_validated("nobody@example.com").await.unwrap());

        let user = db.find_by_email("ada@example.com").await.unwrap().unwrap();
        assert!(user.email_validated);
    }
}
