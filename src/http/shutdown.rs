//! Graceful shutdown signal handling.
//!
//! On SIGTERM or SIGINT the server stops accepting new connections, waits
//! for in-flight requests to complete, then exits.

use axum_server::Handle;

/// Connection-drain window after a shutdown signal.
const SHUTDOWN_GRACE_SECS: u64 = 30;

/// Setup graceful shutdown on SIGTERM and SIGINT.
pub fn setup_shutdown_handler(handle: Handle) {
    tokio::spawn(async move {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, initiating graceful shutdown");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, initiating graceful shutdown");
            }
        }

        handle.graceful_shutdown(Some(std::time::Duration::from_secs(SHUTDOWN_GRACE_SECS)));
        tracing::info!(
            grace_secs = SHUTDOWN_GRACE_SECS,
            "Graceful shutdown initiated, draining connections"
        );
    });
}
