//! HS256 token adapter.
//!
//! [`JwtAdapter`] is built once at startup from [`JwtConfig`] and shared
//! through application state. It signs any serializable payload with an
//! `iat`/`exp` pair and verifies tokens back into the payload type.
//!
//! # Lifetimes
//!
//! Token lifetimes are written as `<n><unit>` with units `s`, `m`, `h` and
//! `d` (`30s`, `15m`, `2h`, `1d`); a bare number is read as seconds. The
//! configured `JWT_EXPIRES_IN` becomes the default lifetime used by
//! [`JwtAdapter::generate_default`].

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Serialize, de::DeserializeOwned};

use shopfront_config::JwtConfig;

use crate::claims::TokenClaims;

const FALLBACK_TTL: Duration = Duration::from_secs(2 * 60 * 60);

#[derive(Clone)]
pub struct JwtAdapter {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    default_ttl: Duration,
}

impl std::fmt::Debug for JwtAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAdapter")
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}

impl JwtAdapter {
    /// Builds the adapter from configuration.
    ///
    /// An unparseable `expires_in` falls back to two hours.
    pub fn new(config: &JwtConfig) -> Self {
        let default_ttl = parse_ttl(&config.expires_in).unwrap_or_else(|| {
            tracing::warn!(
                expires_in = %config.expires_in,
                "Invalid JWT_EXPIRES_IN, using 2h"
            );
            FALLBACK_TTL
        });

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            default_ttl,
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Signs `payload` with `exp = now + ttl`.
    ///
    /// Returns `None` if signing fails or `exp` does not fit in a timestamp.
    pub fn generate_token<P: Serialize>(&self, payload: &P, ttl: Duration) -> Option<String> {
        let now = Utc::now().timestamp().max(0) as usize;
        let ttl = usize::try_from(ttl.as_secs()).ok()?;
        let Some(exp) = now.checked_add(ttl) else {
            tracing::error!(ttl_secs = ttl, "Token lifetime overflows expiry timestamp");
            return None;
        };
        let claims = TokenClaims {
            payload,
            iat: now,
            exp,
        };
        self.sign(&claims)
    }

    /// Signs `payload` with the configured default lifetime.
    pub fn generate_default<P: Serialize>(&self, payload: &P) -> Option<String> {
        self.generate_token(payload, self.default_ttl)
    }

    /// Verifies signature and expiry, returning the payload.
    ///
    /// Every failure (bad signature, expired, malformed, payload shape
    /// mismatch) yields `None`.
    pub fn validate_token<P: DeserializeOwned>(&self, token: &str) -> Option<P> {
        self.decode_claims(token).map(|claims| claims.payload)
    }

    pub(crate) fn decode_claims<P: DeserializeOwned>(&self, token: &str) -> Option<TokenClaims<P>> {
        match decode::<TokenClaims<P>>(token, &self.decoding_key, &Validation::default()) {
            Ok(data) => Some(data.claims),
            Err(error) => {
                tracing::debug!(%error, "Token rejected");
                None
            }
        }
    }

    fn sign<C: Serialize>(&self, claims: &C) -> Option<String> {
        match encode(&Header::default(), claims, &self.encoding_key) {
            Ok(token) => Some(token),
            Err(error) => {
                tracing::error!(%error, "Failed to sign token");
                None
            }
        }
    }
}

/// Parses a lifetime such as `30s`, `15m`, `2h` or `1d`.
pub fn parse_ttl(value: &str) -> Option<Duration> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let (number, multiplier) = match value.char_indices().last()? {
        (idx, 's') => (&value[..idx], 1),
        (idx, 'm') => (&value[..idx], 60),
        (idx, 'h') => (&value[..idx], 60 * 60),
        (idx, 'd') => (&value[..idx], 24 * 60 * 60),
        (_, c) if c.is_ascii_digit() => (value, 1),
        _ => return None,
    };

    let amount: u64 = number.trim().parse().ok()?;
    Some(Duration::from_secs(amount.checked_mul(multiplier)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::{EmailTokenPayload, UserTokenPayload};

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig::new("test-secret-key-at-least-32-characters-long", "2h")
    }

    fn sample_payload() -> UserTokenPayload {
        UserTokenPayload {
            id: "65f1c0ffee0000000000abcd".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    #[test]
    fn test_generate_and_validate_roundtrip() {
        let jwt = JwtAdapter::new(&get_test_jwt_config());
        let token = jwt.generate_default(&sample_payload()).unwrap();
        assert!(!token.is_empty());

        let decoded: UserTokenPayload = jwt.validate_token(&token).unwrap();
        assert_eq!(decoded, sample_payload());
    }

    #[test]
    fn test_claims_carry_iat_and_exp() {
        let jwt = JwtAdapter::new(&get_test_jwt_config());
        let token = jwt
            .generate_token(&sample_payload(), Duration::from_secs(900))
            .unwrap();

        let claims: TokenClaims<UserTokenPayload> = jwt.decode_claims(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 900);
        assert_eq!(claims.payload.email, "test@example.com");
    }

    #[test]
    fn test_validate_token_invalid() {
        let jwt = JwtAdapter::new(&get_test_jwt_config());
        assert!(jwt.validate_token::<UserTokenPayload>("invalid-token").is_none());
    }

    #[test]
    fn test_validate_token_wrong_secret() {
        let jwt = JwtAdapter::new(&get_test_jwt_config());
        let token = jwt.generate_default(&sample_payload()).unwrap();

        let other = JwtAdapter::new(&JwtConfig::new(
            "different-secret-key-at-least-32-characters",
            "2h",
        ));
        assert!(other.validate_token::<UserTokenPayload>(&token).is_none());
    }

    #[test]
    fn test_validate_token_expired() {
        let jwt = JwtAdapter::new(&get_test_jwt_config());
        let now = Utc::now().timestamp() as usize;
        let claims = TokenClaims {
            payload: sample_payload(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = jwt.sign(&claims).unwrap();

        assert!(jwt.validate_token::<UserTokenPayload>(&token).is_none());
    }

    #[test]
    fn test_email_token_without_email_still_decodes() {
        let jwt = JwtAdapter::new(&get_test_jwt_config());
        let token = jwt
            .generate_default(&serde_json::json!({ "purpose": "other" }))
            .unwrap();

        let payload: EmailTokenPayload = jwt.validate_token(&token).unwrap();
        assert_eq!(payload.email, None);
        assert!(!payload.is_email_validation());
    }

    #[test]
    fn test_session_token_is_not_email_validation() {
        let jwt = JwtAdapter::new(&get_test_jwt_config());
        let session = jwt.generate_default(&sample_payload()).unwrap();
        let payload: EmailTokenPayload = jwt.validate_token(&session).unwrap();
        assert!(!payload.is_email_validation());

        let link = jwt
            .generate_default(&EmailTokenPayload::new("test@example.com"))
            .unwrap();
        let payload: EmailTokenPayload = jwt.validate_token(&link).unwrap();
        assert!(payload.is_email_validation());
        assert_eq!(payload.email.as_deref(), Some("test@example.com"));
    }

    #[test]
    fn test_overflowing_ttl_returns_none() {
        let ttl = parse_ttl(&format!("{}s", u64::MAX)).unwrap();

        let jwt = JwtAdapter::new(&get_test_jwt_config());
        assert!(jwt.generate_token(&sample_payload(), ttl).is_none());
        assert!(jwt.generate_token(&sample_payload(), Duration::MAX).is_none());
        assert_eq!(parse_ttl("99999999999999999d"), None);
    }

    #[test]
    fn test_invalid_expires_in_falls_back() {
        let jwt = JwtAdapter::new(&JwtConfig::new("secret", "soon"));
        assert_eq!(jwt.default_ttl(), FALLBACK_TTL);
    }

    #[test]
    fn test_parse_ttl_units() {
        assert_eq!(parse_ttl("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_ttl("15m"), Some(Duration::from_secs(900)));
        assert_eq!(parse_ttl("2h"), Some(Duration::from_secs(7200)));
        assert_eq!(parse_ttl("1d"), Some(Duration::from_secs(86400)));
        assert_eq!(parse_ttl("45"), Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_parse_ttl_rejects_garbage() {
        assert_eq!(parse_ttl(""), None);
        assert_eq!(parse_ttl("h"), None);
        assert_eq!(parse_ttl("2w"), None);
        assert_eq!(parse_ttl("-1h"), None);
    }
}
