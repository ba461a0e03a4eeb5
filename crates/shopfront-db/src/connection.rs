//! Client setup and index bootstrap.

use mongodb::{
    Client, Database, IndexModel,
    bson::{Document, doc},
    options::{ClientOptions, IndexOptions},
};
use shopfront_config::MongoConfig;
use tracing::info;

use crate::error::{DbError, DbResult};
use crate::{CATEGORIES, PRODUCTS, USERS};

/// Connects with the configured pool settings and verifies the server is
/// reachable before returning the database handle.
pub async fn connect(config: &MongoConfig) -> DbResult<Database> {
    info!(database = %config.database, "Connecting to MongoDB");

    let mut options = ClientOptions::parse(&config.url).await?;
    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(config.connect_timeout);
    options.server_selection_timeout = Some(config.server_selection_timeout);
    options.app_name = Some("shopfront".to_string());

    let client = Client::with_options(options)?;
    let db = client.database(&config.database);

    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(db)
}

fn unique_index(field: &str, name: &str) -> IndexModel {
    let mut keys = Document::new();
    keys.insert(field, 1);

    IndexModel::builder()
        .keys(keys)
        .options(
            IndexOptions::builder()
                .unique(true)
                .name(name.to_string())
                .build(),
        )
        .build()
}

/// Creates the unique indexes backing the uniqueness pre-checks:
/// `users.email`, `categories.name` and `products.name`.
pub async fn init_indexes(db: &Database) -> DbResult<()> {
    db.collection::<Document>(USERS)
        .create_index(unique_index("email", "idx_users_email_unique"))
        .await?;
    db.collection::<Document>(CATEGORIES)
        .create_index(unique_index("name", "idx_categories_name_unique"))
        .await?;
    db.collection::<Document>(PRODUCTS)
        .create_index(unique_index("name", "idx_products_name_unique"))
        .await?;

    info!("MongoDB indexes created successfully");
    Ok(())
}
