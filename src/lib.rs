//! Docker Test Server: a minimal HTTP server for verifying that a
//! containerized deployment is reachable and functioning.
//!
//! Exposes a welcome page, a health check, a system information endpoint,
//! and a fixed test endpoint, plus auto-generated API documentation views.
//! Every response is computed independently per request with no shared
//! mutable state.

pub mod api_docs;
pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
