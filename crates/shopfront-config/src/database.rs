//! MongoDB connection settings.
//!
//! | Variable              | Default                     |
//! |-----------------------|-----------------------------|
//! | `MONGO_URL`           | `mongodb://localhost:27017` |
//! | `MONGO_DB_NAME`       | `shopfront`                 |
//! | `MONGO_MAX_POOL_SIZE` | `100`                       |
//! | `MONGO_MIN_POOL_SIZE` | `5`                         |

use std::time::Duration;

use crate::{env_or, env_parse};

#[derive(Clone, Debug)]
pub struct MongoConfig {
    pub url: String,
    pub database: String,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "shopfront".to_string(),
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout: Duration::from_secs(10),
            server_selection_timeout: Duration::from_secs(10),
        }
    }
}

impl MongoConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env_or("MONGO_URL", &defaults.url),
            database: env_or("MONGO_DB_NAME", &defaults.database),
            max_pool_size: env_parse("MONGO_MAX_POOL_SIZE", defaults.max_pool_size),
            min_pool_size: env_parse("MONGO_MIN_POOL_SIZE", defaults.min_pool_size),
            ..defaults
        }
    }
}
