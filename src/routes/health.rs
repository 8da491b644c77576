//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns a fixed JSON payload whenever the
//! process can respond to HTTP. Used by Kubernetes, ECS, and load balancers
//! to verify the service is alive.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Fixed payload returned by the health check.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy" while the process is serving requests
    pub status: String,
    pub message: String,
}

/// Health check handler.
///
/// Returns the same payload for every request - this is a liveness probe, it
/// only verifies that the process and the HTTP stack work end to end.
#[utoipa::path(
    get,
    path = "/healthz",
    responses((status = 200, description = "Server is healthy", body = HealthResponse)),
    tag = "probes",
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Server is running".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_returns_fixed_payload() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.message, "Server is running");
    }

    #[tokio::test]
    async fn health_serializes_to_expected_json() {
        let Json(body) = health().await;
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"status": "healthy", "message": "Server is running"})
        );
    }
}
