//! Docker Test Server: a minimal HTTP server for deployment smoke tests.
//!
//! This is the application entry point. It parses command line arguments,
//! loads configuration from a TOML file, initializes tracing, builds the
//! tokio runtime with the configured worker count, sets up the axum router
//! with all routes, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docker_test_server::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use docker_test_server::http::start_server;
use docker_test_server::routes::create_router;

/// Docker Test Server: a minimal HTTP server for deployment smoke tests
#[derive(Parser, Debug)]
#[command(name = "docker-test-server", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "docker_test_server=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    init_tracing(&log_filter, &config.logging.format);

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        workers = config.http.workers,
        "Loaded configuration"
    );

    // Handlers never block, so the worker count is simply the size of the
    // runtime's thread pool.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.http.workers)
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let app = create_router();
        start_server(app, &config).await
    })?;

    Ok(())
}

/// Initialize the global tracing subscriber in text or JSON format.
fn init_tracing(filter: &str, format: &str) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    if format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
