//! HTTP server module.
//!
//! Binds the listener and serves the router, with graceful shutdown on
//! SIGTERM/SIGINT (connection draining for rolling deploys).

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
