//! Password hashing with bcrypt.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

/// Hashes a plain-text password with bcrypt at the default cost.
///
/// # Errors
///
/// Returns an internal error if bcrypt fails.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST).map_err(AppError::internal)
}

/// Checks a plain-text password against a stored bcrypt hash.
///
/// A malformed hash counts as a mismatch.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    match verify(password, hashed) {
        Ok(matches) => matches,
        Err(error) => {
            tracing::warn!(%error, "Password hash could not be verified");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let hashed = hash_password("secret123").unwrap();
        assert_ne!(hashed, "secret123");
        assert!(hashed.starts_with("$2"));
    }

    #[test]
    fn test_verify_matches() {
        let hashed = hash_password("secret123").unwrap();
        assert!(verify_password("secret123", &hashed));
        assert!(!verify_password("wrong", &hashed));
    }

    #[test]
    fn test_same_password_different_salts() {
        let a = hash_password("secret123").unwrap();
        let b = hash_password("secret123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_mismatch() {
        assert!(!verify_password("secret123", "not-a-bcrypt-hash"));
    }
}
