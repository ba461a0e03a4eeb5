//! Request extractors.
//!
//! - [`auth`]: bearer-token authentication resolving to the stored user
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] verifies the token and reads `{id, email}`
//! 3. The user is loaded by id; a deleted user is rejected
//! 4. The handler receives the full [`shopfront_models::User`]

pub mod auth;
