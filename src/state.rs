use std::sync::Arc;

use shopfront_auth::JwtAdapter;
use shopfront_config::{CorsConfig, EmailConfig, JwtConfig};
use shopfront_db::{
    CategoryRepository, Database, MongoCategoryRepository, MongoProductRepository,
    MongoUserRepository, ProductRepository, UserRepository,
};
use shopfront_observability::PrometheusHandle;

use crate::utils::email::EmailService;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub jwt: JwtAdapter,
    pub email: EmailService,
    pub cors_config: CorsConfig,
    /// Present when a Prometheus recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
        jwt_config: &JwtConfig,
        email_config: EmailConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            users,
            categories,
            products,
            jwt: JwtAdapter::new(jwt_config),
            email: EmailService::new(email_config),
            cors_config,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Option<PrometheusHandle>) -> Self {
        self.metrics = metrics;
        self
    }

    /// State backed by in-memory repositories, with mail sending disabled.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn in_memory(jwt_config: &JwtConfig) -> Self {
        let db = Arc::new(shopfront_db::memory::InMemoryDb::new());
        Self::new(
            db.clone(),
            db.clone(),
            db,
            jwt_config,
            EmailConfig::default(),
            CorsConfig::from_list("*"),
        )
    }
}

/// Builds the state over MongoDB with configuration read from the environment.
pub fn init_app_state(db: &Database) -> AppState {
    AppState::new(
        Arc::new(MongoUserRepository::new(db)),
        Arc::new(MongoCategoryRepository::new(db)),
        Arc::new(MongoProductRepository::new(db)),
        &JwtConfig::from_env(),
        EmailConfig::from_env(),
        CorsConfig::from_env(),
    )
}
