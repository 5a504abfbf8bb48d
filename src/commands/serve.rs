//! Serve command implementation

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::{api, config::ServerConfig};

/// Bind the listener and run the HTTP service until Ctrl-C
pub async fn handle_serve(config: ServerConfig) -> Result<()> {
    let state = api::AppState::new(&config.cache);

    if config.seed_on_start {
        state
            .store
            .seed_data()
            .context("Failed to seed sample roster")?;
    }

    let listener = api::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    info!(
        addr = %listener.local_addr()?,
        cache_ttl_secs = config.cache.ttl.as_secs(),
        cache_capacity = config.cache.capacity,
        seeded = config.seed_on_start,
        "depth chart service listening"
    );

    api::serve(listener, state, shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("depth chart service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
