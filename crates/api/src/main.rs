//! AURA - meeting scheduler HTTP server

use std::sync::Arc;

use anyhow::Context;
use aura_api::{router, AppContext};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; real environment wins either way.
    dotenvy::dotenv().ok();

    let config = aura_infra::config::load().context("failed to load configuration")?;
    aura_infra::observability::init_tracing(&config.logging)
        .context("failed to initialise tracing")?;

    let address = config.server.address.clone();
    let ctx = AppContext::new_with_config(config).context("failed to build application context")?;
    let app = router(Arc::new(ctx));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, "aura listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("aura stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
