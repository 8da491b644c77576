//! HTTP route handlers for the test server.
//!
//! Routes are organized one module per endpoint, with per-route
//! Cache-Control headers: the static welcome page may be cached briefly,
//! while the probe endpoints always return fresh state.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod health;
pub mod home;
pub mod info;
pub mod test;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::api_docs::ApiDoc;
use crate::config::{CACHE_CONTROL_HOME, CACHE_CONTROL_PROBE};
use crate::middleware::request_id_layer;

/// Path serving the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Creates the axum router with all routes, documentation views, and cache
/// headers. Unmatched paths fall through to the framework's default 404.
pub fn create_router() -> Router {
    // Welcome page - static content, short cache
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Probe endpoints - never cached, always reflect the live process
    let probe_routes = Router::new()
        .route("/healthz", get(health::health))
        .route("/info", get(info::info))
        .route("/test", get(test::test))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ));

    Router::new()
        .merge(home_routes)
        .merge(probe_routes)
        .merge(SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
