//! # Shopfront API
//!
//! A REST backend for a small e-commerce catalogue, built with Rust, Axum and
//! MongoDB.
//!
//! ## Overview
//!
//! - **Authentication**: registration and login with bcrypt-hashed passwords
//!   and HS256 JWTs
//! - **Email validation**: a signed link is mailed at registration; following
//!   it marks the address as validated
//! - **Catalogue**: categories and products, created by authenticated users and
//!   listed publicly with page/limit pagination
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # AuthUser extractor
//! ├── modules/          # Feature modules
//! │   ├── auth/        # register, login, validate-email
//! │   ├── categories/  # create and list categories
//! │   ├── products/    # create and list products
//! │   └── health.rs    # /health and /metrics
//! └── utils/            # Email delivery
//!
//! crates/
//! ├── shopfront-core/           # AppError, pagination, password hashing
//! ├── shopfront-config/         # Environment-driven settings
//! ├── shopfront-auth/           # JWT adapter and claims
//! ├── shopfront-models/         # Documents and DTOs
//! ├── shopfront-db/             # MongoDB repositories
//! ├── shopfront-observability/  # Tracing and Prometheus metrics
//! └── shopfront-cli/            # Seeding and admin tooling
//! ```
//!
//! Each feature module has a `controller.rs` (HTTP handlers), a `service.rs`
//! (business rules, written against repository traits) and a `router.rs`.
//!
//! ## Routes
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | POST | `/api/auth/register` | - |
//! | POST | `/api/auth/login` | - |
//! | GET | `/api/auth/validate-email/{token}` | - |
//! | POST | `/api/categories` | Bearer |
//! | GET | `/api/categories?page=&limit=` | - |
//! | POST | `/api/products` | Bearer |
//! | GET | `/api/products?page=&limit=` | - |
//!
//! Errors are returned as `{"error": "<message>"}`.
//!
//! ## Quick Start
//!
//! ```bash
//! MONGO_URL=mongodb://localhost:27017
//! MONGO_DB_NAME=shopfront
//! JWT_SECRET=change-me
//! JWT_EXPIRES_IN=2h
//! PORT=3000
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;

// Re-export workspace crates for convenience
pub use shopfront_auth;
pub use shopfront_config;
pub use shopfront_core;
pub use shopfront_db;
pub use shopfront_models;
pub use shopfront_observability;
