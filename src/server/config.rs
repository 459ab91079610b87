//! Server configuration loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Address the server binds when nothing else is configured.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7433";

/// Environment variable overriding the bind address.
pub const BIND_ADDR_ENV: &str = "TASKLINE_ADDR";

/// Transport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the TCP listener binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_owned()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl ServerConfig {
    /// Builds a configuration from the environment, falling back to
    /// defaults.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(BIND_ADDR_ENV).map_or_else(|_| Self::default(), |addr| Self { bind_addr: addr })
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it does not deserialize to a valid
    /// configuration.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`ServerConfig`].
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        /// Path that was parsed.
        path: String,
        /// Underlying deserialization failure.
        source: serde_json::Error,
    },
}
