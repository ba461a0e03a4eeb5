//! # Shopfront Core
//!
//! Core types, errors, and utilities for the Shopfront API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`pagination`]: Page/limit parsing and next/prev link building
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use shopfront_core::errors::AppError;
//! use shopfront_core::pagination::PaginationParams;
//! use shopfront_core::password::{hash_password, verify_password};
//!
//! let error = AppError::bad_request(anyhow::anyhow!("Email already exists"));
//!
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash));
//!
//! let pagination = PaginationParams::default().validate()?;
//! assert_eq!(pagination.offset(), 0);
//! ```

pub mod errors;
pub mod pagination;
pub mod password;

pub use errors::AppError;
pub use pagination::{PageMeta, Pagination, PaginationParams};
pub use password::{hash_password, verify_password};
