use anyhow::Context;
use dotenvy::dotenv;
use shopfront::router::init_router;
use shopfront::state::init_app_state;
use shopfront_config::{MongoConfig, ServerConfig};
use shopfront_db::{connect, init_indexes};
use shopfront_observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let mongo_config = MongoConfig::from_env();
    let server_config = ServerConfig::from_env();

    let db = connect(&mongo_config)
        .await
        .context("Failed to connect to MongoDB")?;
    init_indexes(&db)
        .await
        .context("Failed to create MongoDB indexes")?;

    let state = init_app_state(&db).with_metrics(init_metrics());
    let app = init_router(state);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    tracing::info!(address = %address, "🚀 Server running");
    tracing::info!("📚 Swagger UI available at /swagger-ui, Scalar at /scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
