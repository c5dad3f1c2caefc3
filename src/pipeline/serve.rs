// src/pipeline/serve.rs

//! Dynamic site server.

use crate::error::Result;
use crate::models::Config;
use crate::web::{AppState, create_router};

/// Bind the configured address and serve the site until Ctrl-C.
pub async fn run_server(config: Config) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let state = AppState::new(config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C.
pub(crate) async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}
