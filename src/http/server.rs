//! HTTP server startup logic.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind or serve: {0}")]
    Bind(#[from] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// Installs the SIGTERM/SIGINT handler and blocks until the server has shut down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.http.socket_addr()?;
    let grace = Duration::from_secs(config.http.shutdown_timeout_seconds);

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone(), grace);

    serve(app, addr, handle).await
}

/// Serve `app` on `addr` until `handle` is shut down.
///
/// The bound address (useful when `addr` has port 0) is available from
/// `handle.listening()` once the listener is up.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
