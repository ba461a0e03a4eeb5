//! Shared utilities.
//!
//! - [`email`]: verification mail delivery over SMTP

pub mod email;
