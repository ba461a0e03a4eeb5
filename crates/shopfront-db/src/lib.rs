//! # Shopfront DB
//!
//! MongoDB access for the Shopfront API.
//!
//! ```text
//! shopfront-db/
//! ├── error.rs       DbError and its HTTP mapping
//! ├── connection.rs  client setup, ping, index bootstrap
//! ├── repository.rs  UserRepository / CategoryRepository / ProductRepository
//! ├── mongo/         MongoDB implementations
//! └── memory.rs      in-memory implementations (feature `test-utils`)
//! ```
//!
//! Services only see the repository traits, held as `Arc<dyn ...>` in
//! application state, so the HTTP layer can be exercised without a running
//! database.
//!
//! # Example
//!
//! ```ignore
//! use shopfront_config::MongoConfig;
//! use shopfront_db::{connect, init_indexes, MongoUserRepository};
//!
//! let db = connect(&MongoConfig::from_env()).await?;
//! init_indexes(&db).await?;
//! let users = MongoUserRepository::new(&db);
//! ```

pub mod connection;
pub mod error;
pub mod mongo;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

pub use connection::{connect, init_indexes};
pub use error::{DbError, DbResult};
pub use mongo::{MongoCategoryRepository, MongoProductRepository, MongoUserRepository};
pub use repository::{CategoryRepository, ProductRepository, UserRepository};

pub use mongodb::Database;

pub const USERS: &str = "users";
pub const CATEGORIES: &str = "categories";
pub const PRODUCTS: &str = "products";
