//! Server configuration from environment variables
//!
//! - `EVENT_GRAPH_ADDR`: listen address (default `127.0.0.1:4000`)
//! - `EVENT_GRAPH_SEED_FILE`: optional JSON seed dataset
//! - `EVENT_GRAPH_LOG`: log level (default `info`)

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::Level;

pub const ADDR_VAR: &str = "EVENT_GRAPH_ADDR";
pub const SEED_FILE_VAR: &str = "EVENT_GRAPH_SEED_FILE";
pub const LOG_VAR: &str = "EVENT_GRAPH_LOG";

const DEFAULT_ADDR: &str = "127.0.0.1:4000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} '{value}': expected host:port")]
    InvalidAddr { var: &'static str, value: String },

    #[error("invalid {var} '{value}': expected trace, debug, info, warn or error")]
    InvalidLogLevel { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub seed_file: Option<PathBuf>,
    pub log_level: Level,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let listen_addr = addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: addr.clone(),
            })?;

        let seed_file = lookup(SEED_FILE_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|path| resolve_path(&path));

        let level = lookup(LOG_VAR).unwrap_or_else(|| "info".to_string());
        let log_level = level
            .trim()
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel {
                var: LOG_VAR,
                value: level.clone(),
            })?;

        Ok(Self {
            listen_addr,
            seed_file,
            log_level,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 4000)),
            seed_file: None,
            log_level: Level::INFO,
        }
    }
}

/// Relative paths resolve against the working directory
fn resolve_path(path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}
