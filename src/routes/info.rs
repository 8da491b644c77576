//! System information endpoint.
//!
//! Reports a fresh snapshot of process and runtime metadata on every
//! request: toolchain version, OS name, CPU architecture, invoking user,
//! working directory, and a selected set of environment variables. Every
//! value has a safe fallback, so the handler cannot fail.

use axum::Json;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::config::{
    ENV_PATCH_MODULES, ENV_TRACE_SAMPLING, PATH_PREVIEW_MAX_CHARS, PATH_TRUNCATION_MARKER,
    RUSTC_VERSION, UNKNOWN_USER,
};

/// Snapshot of process and runtime metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct InfoResponse {
    pub message: String,
    /// Toolchain version the binary was built with
    pub rust_version: String,
    /// Operating system name
    pub platform: String,
    /// CPU architecture
    pub architecture: String,
    /// Invoking user, "unknown" when $USER is unset
    pub user: String,
    pub working_directory: String,
    pub environment_variables: EnvironmentVariables,
}

/// Environment variables surfaced on the info endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct EnvironmentVariables {
    /// Tracing sampling policy, null when unset
    #[serde(rename = "DD_TRACE_SAMPLING_RULES")]
    pub trace_sampling_rules: Option<String>,
    /// Instrumentation module patching, null when unset
    #[serde(rename = "DD_PATCH_MODULES")]
    pub patch_modules: Option<String>,
    /// Executable search path, truncated for readability
    #[serde(rename = "PATH")]
    pub path: String,
}

/// Collect a fresh snapshot of the process environment.
fn collect() -> InfoResponse {
    InfoResponse {
        message: "Docker Test Server".to_string(),
        rust_version: RUSTC_VERSION.to_string(),
        platform: std::env::consts::OS.to_string(),
        architecture: std::env::consts::ARCH.to_string(),
        user: user_or_unknown(std::env::var("USER").ok()),
        working_directory: std::env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        environment_variables: EnvironmentVariables {
            trace_sampling_rules: std::env::var(ENV_TRACE_SAMPLING).ok(),
            patch_modules: std::env::var(ENV_PATCH_MODULES).ok(),
            path: truncate_search_path(&std::env::var("PATH").unwrap_or_default()),
        },
    }
}

/// Invoking user, falling back when the variable is unset.
fn user_or_unknown(user: Option<String>) -> String {
    user.unwrap_or_else(|| UNKNOWN_USER.to_string())
}

/// Truncate $PATH to its first `PATH_PREVIEW_MAX_CHARS` characters, with a
/// trailing marker when longer.
fn truncate_search_path(path: &str) -> String {
    match path.char_indices().nth(PATH_PREVIEW_MAX_CHARS) {
        Some((idx, _)) => format!("{}{}", &path[..idx], PATH_TRUNCATION_MARKER),
        None => path.to_string(),
    }
}

/// System information handler.
#[utoipa::path(
    get,
    path = "/info",
    responses((status = 200, description = "Process and runtime metadata", body = InfoResponse)),
    tag = "probes",
)]
#[instrument(name = "info::info")]
pub async fn info() -> Json<InfoResponse> {
    Json(collect())
}
