//! Shopfront Observability
//!
//! - [`logging`]: `tracing` subscriber setup (console + daily rolling files)
//!   and the per-request logging middleware
//! - [`metrics`]: Prometheus recorder, HTTP metrics middleware and business
//!   counters
//!
//! Metrics are compiled in with the `observability` feature (default) and can
//! be switched off at runtime with `OBSERVABILITY_ENABLED=false`. Without the
//! feature every metrics function is a no-op with the same signature.
//!
//! # Examples
//!
//! ```no_run
//! use shopfront_observability::{init_metrics, init_tracing};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     let prometheus = init_metrics();
//!     // ... build router, serve ...
//! }
//! ```

pub mod logging;

#[cfg(feature = "observability")]
pub mod metrics;

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

pub use self::logging::{init_console_logging, init_tracing, logging_middleware};

#[cfg(feature = "observability")]
pub use self::metrics::{
    LoginOutcome, init_metrics, is_observability_enabled, metrics_middleware,
    track_category_created, track_jwt_issued, track_product_created, track_user_login,
    track_user_registered,
};

/// Bucket name for a status code: `2xx`, `4xx`, `5xx` or `other`.
pub fn status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{extract::Request, middleware::Next, response::Response};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LoginOutcome {
        Success,
        UnknownEmail,
        WrongPassword,
    }

    /// Never rendered; keeps `Option<PrometheusHandle>` call sites compiling.
    #[derive(Clone, Debug)]
    pub struct PrometheusHandle;

    impl PrometheusHandle {
        pub fn render(&self) -> String {
            String::new()
        }
    }

    pub fn is_observability_enabled() -> bool {
        false
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn init_metrics() -> Option<PrometheusHandle> {
        None
    }

    pub fn track_user_registered() {}
    pub fn track_user_login(_outcome: LoginOutcome) {}
    pub fn track_jwt_issued() {}
    pub fn track_category_created() {}
    pub fn track_product_created() {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;

#[cfg(test)]
mod tests {
    use super::status_class;

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(201), "2xx");
        assert_eq!(status_class(401), "4xx");
        assert_eq!(status_class(503), "5xx");
        assert_eq!(status_class(302), "other");
    }
}
