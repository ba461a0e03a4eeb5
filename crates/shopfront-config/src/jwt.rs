use crate::env_or;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of issued tokens, e.g. `30s`, `15m`, `2h`, `1d`.
    pub expires_in: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expires_in: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expires_in: expires_in.into(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            secret: env_or("JWT_SECRET", "your-secret-key-change-in-production"),
            expires_in: env_or("JWT_EXPIRES_IN", "2h"),
        }
    }
}
