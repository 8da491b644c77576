//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! HTTP cache headers, the environment variable read-out on the info
//! endpoint, and logging defaults. `AppConfig` is the root configuration
//! struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Welcome page - static content, short TTL so redeploys show up quickly
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;

pub const CACHE_CONTROL_HOME: &str = formatcp!("public, max-age={}", HTTP_CACHE_HOME_MAX_AGE);

/// Probe endpoints are never cached - each response reflects the live process
pub const CACHE_CONTROL_PROBE: &str = "no-store";

// =============================================================================
// Info Endpoint Read-Out
// =============================================================================

/// Tracing sampling policy variable, passed through verbatim
pub const ENV_TRACE_SAMPLING: &str = "DD_TRACE_SAMPLING_RULES";

/// Instrumentation module patching variable, passed through verbatim
pub const ENV_PATCH_MODULES: &str = "DD_PATCH_MODULES";

/// Maximum characters of $PATH shown before truncation
pub const PATH_PREVIEW_MAX_CHARS: usize = 100;

/// Marker appended to a truncated $PATH value
pub const PATH_TRUNCATION_MARKER: &str = "...";

/// Fallback when the invoking user cannot be determined
pub const UNKNOWN_USER: &str = "unknown";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "docker_test_server=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Toolchain version captured by the build script
pub const RUSTC_VERSION: &str = env!("RUSTC_VERSION");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    /// Listen address (default: all interfaces)
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    /// Listen port (default: 8000)
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    /// Number of tokio worker threads serving requests (default: 4)
    #[serde(default = "HttpServerConfig::default_workers")]
    pub workers: usize,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            workers: Self::default_workers(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8000
    }

    fn default_workers() -> usize {
        4
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: every setting has a working default,
    /// so the container image runs without a mounted config.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
