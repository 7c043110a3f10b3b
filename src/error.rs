//! Error types.
//!
//! - [`ProviderError`]: a platform statistics/identity service failed
//! - [`GatherError`]: aggregation aborted; rendered as `500 text/plain`
//! - [`ConfigError`]: bad environment configuration
//! - [`ModuleListError`]: malformed `PLATFORM_MODULES` entry
//! - [`StartupError`]: the binary could not come up

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failure reported by one of the platform collaborators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The backing service could not be reached or refused the call.
    #[error("{0}")]
    Unavailable(String),

    /// The requested entity (module, queue, ...) does not exist.
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

/// Why a snapshot could not be assembled. First failure wins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatherError {
    #[error(transparent)]
    Cache(ProviderError),

    /// Queue stats failed or came back empty. The cause is logged, not returned.
    #[error("unable to gather queue stats")]
    QueueStats,

    #[error(transparent)]
    Modules(ProviderError),

    #[error(transparent)]
    Runtime(ProviderError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Config error: {key} must be valid (got '{value}')")]
    Invalid { key: String, value: String },

    #[error("Config error: PLATFORM_MODULES {0}")]
    Modules(#[from] ModuleListError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModuleListError {
    #[error("entry '{0}' must look like name=v1|v2")]
    Malformed(String),

    #[error("entry '{0}' has no name")]
    MissingName(String),

    #[error("module '{0}' listed twice")]
    Duplicate(String),

    #[error("module '{0}' has no versions")]
    NoVersions(String),
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("platform init failed: {0}")]
    Platform(#[from] ProviderError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl IntoResponse for ProviderError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

impl IntoResponse for GatherError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
