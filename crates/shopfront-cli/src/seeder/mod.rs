//! Database seeding and admin creation.
//!
//! Seeding wipes the three collections, then inserts users, categories owned
//! by random users, and products with a random owner and category.

mod generate;
mod models;

use std::time::Instant;

use shopfront_core::hash_password;
use shopfront_db::{CategoryRepository, ProductRepository, UserRepository};
use shopfront_models::{User, UserRole};
use tracing::info;

pub use generate::{generate_categories, generate_products, generate_users};
pub use models::{ClearSummary, DEFAULT_SEED_PASSWORD, SeedConfig, SeedSummary};

pub async fn seed_all(
    users: &dyn UserRepository,
    categories: &dyn CategoryRepository,
    products: &dyn ProductRepository,
    config: SeedConfig,
) -> anyhow::Result<SeedSummary> {
    let start = Instant::now();

    let cleared = clear_all(users, categories, products).await?;
    info!(?cleared, "Cleared existing data");

    let password_hash = hash_password(&config.password)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e.message()))?;

    let new_users = generate_users(config.users, &password_hash);
    let new_categories = generate_categories(config.categories, &new_users);
    let new_products = generate_products(config.products, &new_users, &new_categories);

    let summary = SeedSummary {
        users: new_users.len(),
        categories: new_categories.len(),
        products: new_products.len(),
    };

    users.insert_many(new_users).await?;
    categories.insert_many(new_categories).await?;
    products.insert_many(new_products).await?;

    info!(
        users = summary.users,
        categories = summary.categories,
        products = summary.products,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Seeding complete"
    );
    Ok(summary)
}

pub async fn clear_all(
    users: &dyn UserRepository,
    categories: &dyn CategoryRepository,
    products: &dyn ProductRepository,
) -> anyhow::Result<ClearSummary> {
    let (users, categories, products) =
        tokio::try_join!(users.delete_all(), categories.delete_all(), products.delete_all())?;

    Ok(ClearSummary {
        users,
        categories,
        products,
    })
}

/// Creates a user holding both `ADMIN_ROLE` and `USER_ROLE`.
pub async fn create_admin(
    users: &dyn UserRepository,
    name: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<User> {
    if users.find_by_email(email).await?.is_some() {
        anyhow::bail!("User with this email already exists");
    }

    let password_hash = hash_password(password)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e.message()))?;
    let admin = User::new(name, email, password_hash).with_roles(vec![UserRole::Admin, UserRole::User]);

    Ok(users.create(admin).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::verify_password;
    use shopfront_db::memory::InMemoryDb;

    #[tokio::test]
    async fn test_seed_all_replaces_existing_data() {
        let db = InMemoryDb::new();
        create_admin(&db, "Old", "old@example.com", "secret")
            .await
            .unwrap();

        let summary = seed_all(&db, &db, &db, SeedConfig::new(3, 2, 10))
            .await
            .unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                users: 3,
                categories: 2,
                products: 10
            }
        );

        assert!(db.find_by_email("old@example.com").await.unwrap().is_none());
        assert_eq!(CategoryRepository::count(&db).await.unwrap(), 2);
        assert_eq!(ProductRepository::count(&db).await.unwrap(), 10);

        let populated = db.list_populated(0, 10).await.unwrap();
        assert!(populated.iter().all(|p| p.user.is_some() && p.category.is_some()));
    }

    #[tokio::test]
    async fn test_clear_all_counts() {
        let db = InMemoryDb::new();
        seed_all(&db, &db, &db, SeedConfig::new(2, 1, 4))
            .await
            .unwrap();

        let cleared = clear_all(&db, &db, &db).await.unwrap();
        assert_eq!(
            cleared,
            ClearSummary {
                users: 2,
                categories: 1,
                products: 4
            }
        );
    }

    #[tokio::test]
    async fn test_create_admin() {
        let db = InMemoryDb::new();
        let admin = create_admin(&db, "Root", "root@example.com", "s3cret!")
            .await
            .unwrap();

        assert_eq!(admin.role, vec![UserRole::Admin, UserRole::User]);
        assert!(verify_password("s3cret!", &admin.password));

        let err = create_admin(&db, "Root", "root@example.com", "other")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "User with this email already exists");
    }
}
