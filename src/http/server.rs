//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(String),

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the HTTP server.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .map_err(|e| {
            ServerError::Address(format!(
                "{}:{} ({e})",
                config.http.host, config.http.port
            ))
        })?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
