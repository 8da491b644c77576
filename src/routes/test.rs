//! Fixed test endpoint for verifying the container wiring.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Fixed payload returned by the test endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct TestResponse {
    pub message: String,
    pub status: String,
    pub container: String,
    /// Name of the web framework serving the request
    pub framework: String,
}

/// Test endpoint handler.
#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Fixed test payload", body = TestResponse)),
    tag = "probes",
)]
pub async fn test() -> Json<TestResponse> {
    Json(TestResponse {
        message: "Hello from Docker!".to_string(),
        status: "success".to_string(),
        container: "running".to_string(),
        framework: "Axum".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_endpoint_returns_fixed_payload() {
        let Json(body) = test().await;
        assert_eq!(body.message, "Hello from Docker!");
        assert_eq!(body.status, "success");
        assert_eq!(body.container, "running");
        assert_eq!(body.framework, "Axum");
    }

    #[tokio::test]
    async fn test_endpoint_serializes_to_expected_json() {
        let Json(body) = test().await;
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message": "Hello from Docker!",
                "status": "success",
                "container": "running",
                "framework": "Axum",
            })
        );
    }
}
