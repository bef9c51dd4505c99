//! Spread Alerts - HTTP service
//!
//! Serves alert registration and spread queries backed by the upstream market data API.

use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spread_alerts::{api, AppState, Config, MarketClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().json())
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    info!("Starting Spread Alerts service");

    let config = Config::load()?;
    info!(timeout_ms = config.upstream_timeout_ms, "Configuration loaded");

    let client = MarketClient::new(&config)?;
    info!(upstream = %client.endpoint(), "Upstream client ready");
    let state = Arc::new(AppState::new(Arc::new(client))?);
    let app = api::router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
