use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use recommender_api::{
    config::Config,
    middleware::cors_layer,
    routes::{create_router, AppState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Snapshots are loaded once; a missing or inconsistent table aborts startup
    let state = AppState::load(&config)?;
    let app = create_router(Arc::new(state)).layer(cors_layer(&config.cors_origins)?);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        address = %addr,
        origins = config.cors_origins.len(),
        "Movie & Book Recommender API started"
    );

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
