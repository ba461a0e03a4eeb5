//! JWT claim structures.

use serde::{Deserialize, Serialize};

/// Registered claims wrapped around an application payload.
///
/// The payload is flattened so a session token decodes to
/// `{"id": "...", "email": "...", "iat": 1700000000, "exp": 1700007200}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims<P> {
    #[serde(flatten)]
    pub payload: P,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
    /// Expiration (Unix timestamp)
    pub exp: usize,
}

/// Session token payload issued on register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTokenPayload {
    /// User id (ObjectId hex)
    pub id: String,
    pub email: String,
}

/// `purpose` claim carried by e-mail verification tokens.
pub const EMAIL_VALIDATION_PURPOSE: &str = "email_validation";

/// Payload of the e-mail verification link.
///
/// `email` is optional so a verification token missing the address still
/// decodes and can be reported on its own. Tokens without the
/// [`EMAIL_VALIDATION_PURPOSE`] claim, session tokens included, are not
/// verification tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmailTokenPayload {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
}

impl EmailTokenPayload {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            purpose: Some(EMAIL_VALIDATION_PURPOSE.to_string()),
        }
    }

    pub fn is_email_validation(&self) -> bool {
        self.purpose.as_deref() == Some(EMAIL_VALIDATION_PURPOSE)
    }
}
