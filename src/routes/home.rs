//! Welcome page handler.
//!
//! Serves a static HTML page listing the server status and the available
//! endpoints. The page is assembled at compile time; only the toolchain
//! version is spliced in, via the env var captured by the build script.

use axum::response::Html;
use tracing::instrument;

/// Static welcome page served at `/`.
const WELCOME_PAGE: &str = concat!(
    r#"<!DOCTYPE html>
<html>
<head>
    <title>Docker Test Server</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; background-color: #f5f5f5; }
        .container { max-width: 800px; margin: 0 auto; background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        h1 { color: #333; text-align: center; }
        .status { background: #d4edda; padding: 10px; border-radius: 4px; margin: 20px 0; }
        .info { background: #e2e3e5; padding: 15px; border-radius: 4px; margin: 10px 0; }
    </style>
</head>
<body>
    <div class="container">
        <h1>&#x1F433; Docker Test Server Running!</h1>
        <div class="status">
            <strong>&#x2705; Server Status:</strong> Running successfully on port 8000
        </div>
        <div class="info">
            <h3>Server Information:</h3>
            <p><strong>Framework:</strong> Axum with Tokio</p>
            <p><strong>Rust Version:</strong> "#,
    env!("RUSTC_VERSION"),
    r#"</p>
            <p><strong>Workers:</strong> 4</p>
            <p><strong>Host:</strong> 0.0.0.0:8000</p>
        </div>
        <div class="info">
            <h3>Available Endpoints:</h3>
            <ul>
                <li><a href="/">/</a> - This welcome page</li>
                <li><a href="/healthz">/healthz</a> - Health check endpoint</li>
                <li><a href="/info">/info</a> - System information</li>
                <li><a href="/test">/test</a> - Test endpoint</li>
                <li><a href="/docs">/docs</a> - API documentation (Swagger UI)</li>
                <li><a href="/redoc">/redoc</a> - Alternative API documentation</li>
            </ul>
        </div>
    </div>
</body>
</html>
"#
);

/// Welcome page handler.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome page listing the available endpoints", content_type = "text/html", body = String)
    ),
    tag = "general",
)]
#[instrument(name = "home::index")]
pub async fn index() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}
