//! Top-level server errors.

use std::net::SocketAddr;

use crate::config::ConfigError;

/// Errors that abort server startup or shutdown.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    /// Leptos options could not be loaded (missing or malformed
    /// `[package.metadata.leptos]` or `LEPTOS_*` variables).
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
