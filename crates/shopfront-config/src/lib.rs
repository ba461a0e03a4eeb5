//! # Shopfront Config
//!
//! Configuration types for the Shopfront API.
//!
//! Each structure is loaded from environment variables with a `from_env()`
//! constructor and falls back to development defaults:
//!
//! - [`server`]: HTTP listener settings
//! - [`database`]: MongoDB connection settings
//! - [`jwt`]: JWT signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`email`]: Email/SMTP configuration
//!
//! # Example
//!
//! ```ignore
//! use shopfront_config::{CorsConfig, EmailConfig, JwtConfig, MongoConfig, ServerConfig};
//!
//! dotenvy::dotenv().ok();
//! let server = ServerConfig::from_env();
//! let mongo = MongoConfig::from_env();
//! let jwt = JwtConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod email;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use database::MongoConfig;
pub use email::EmailConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

pub(crate) fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}
