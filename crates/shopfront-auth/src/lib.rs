//! # Shopfront Auth
//!
//! JWT issuing and verification for the Shopfront API.
//!
//! - [`claims`]: token payloads and the registered claims wrapped around them
//! - [`jwt`]: [`JwtAdapter`], the HS256 signer/verifier held in application state
//!
//! Two payloads are in use:
//!
//! - **Session token** ([`UserTokenPayload`]): `{id, email}`, returned by
//!   register and login and sent back as `Authorization: Bearer`
//! - **E-mail token** ([`EmailTokenPayload`]): `{email, purpose}`, embedded in
//!   the verification link mailed at registration
//!
//! The adapter never fails loudly: signing returns `Option<String>` and
//! verification returns `Option<P>`, leaving callers to decide which HTTP
//! error a `None` becomes.
//!
//! # Example
//!
//! ```ignore
//! use shopfront_auth::{JwtAdapter, UserTokenPayload};
//! use shopfront_config::JwtConfig;
//!
//! let jwt = JwtAdapter::new(&JwtConfig::from_env());
//!
//! let payload = UserTokenPayload { id: user_id, email: "user@example.com".into() };
//! let token = jwt.generate_default(&payload).ok_or(...)?;
//!
//! let decoded: Option<UserTokenPayload> = jwt.validate_token(&token);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::{EMAIL_VALIDATION_PURPOSE, EmailTokenPayload, TokenClaims, UserTokenPayload};
pub use jwt::{JwtAdapter, parse_ttl};
