//! # Shopfront CLI
//!
//! Database seeding and administration utilities for Shopfront.
//!
//! The seeder is written against the repository traits, so it runs the same
//! way against MongoDB and the in-memory store used in tests.
//!
//! ## Usage
//!
//! ```ignore
//! use shopfront_cli::seeder::{seed_all, SeedConfig};
//!
//! let users = MongoUserRepository::new(&db);
//! let categories = MongoCategoryRepository::new(&db);
//! let products = MongoProductRepository::new(&db);
//! seed_all(&users, &categories, &products, SeedConfig::default()).await?;
//! ```

pub mod seeder;
