//! API server configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;

use serde::{Deserialize, Serialize};

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,

    /// Allow any origin
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            enable_cors: false,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// - `API_HOST` (default `0.0.0.0`)
    /// - `API_PORT` (default `8080`)
    /// - `LOG_LEVEL` (default `info`)
    /// - `ENABLE_CORS` (default `false`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a
    /// variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            host: lookup("API_HOST").unwrap_or(defaults.host),

            port: match lookup("API_PORT") {
                Some(port) => port
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("API_PORT".to_string()))?,
                None => defaults.port,
            },

            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),

            enable_cors: match lookup("ENABLE_CORS") {
                Some(flag) => flag
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("ENABLE_CORS".to_string()))?,
                None => defaults.enable_cors,
            },
        };

        if config.host.trim().is_empty() {
            return Err(ConfigError::MissingRequired("API_HOST".to_string()));
        }

        Ok(config)
    }

    /// Host and port to bind. The host may be a name (`localhost`) or an
    /// IPv4/IPv6 address; names are resolved at bind time.
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
