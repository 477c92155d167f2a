//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Errors produced while reading server configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port number.
    #[error("invalid PORT {value:?}: expected 0-65535")]
    InvalidPort { value: String },

    /// `BIND_ADDR` is not an IP address.
    #[error("invalid BIND_ADDR {value:?}: expected an IP address")]
    InvalidBindAddr { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Directory served under `/assets` (hero image and other static media).
    pub assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT, assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR) }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `ASSETS_DIR`: default `assets`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).map(|raw| raw.trim().to_owned()).filter(|raw| !raw.is_empty());

        let port = match read("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match read("BIND_ADDR") {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr { value: raw })?,
            None => DEFAULT_BIND_ADDR,
        };
        let assets_dir = read("ASSETS_DIR").map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from);

        Ok(Self { bind_addr, port, assets_dir })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
