//! Seeding configuration and result counts.

pub const DEFAULT_SEED_PASSWORD: &str = "123456";

/// How many documents of each kind to generate.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub users: usize,
    pub categories: usize,
    pub products: usize,
    /// Plain password shared by every seeded user.
    pub password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: 5,
            categories: 6,
            products: 25,
            password: DEFAULT_SEED_PASSWORD.to_string(),
        }
    }
}

impl SeedConfig {
    pub fn new(users: usize, categories: usize, products: usize) -> Self {
        Self {
            users,
            categories,
            products,
            ..Self::default()
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub categories: usize,
    pub products: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearSummary {
    pub users: u64,
    pub categories: u64,
    pub products: u64,
}
