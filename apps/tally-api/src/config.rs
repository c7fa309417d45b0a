//! Tally API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::Serialize;
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STORE_SHARDS: usize = 16;
const DEFAULT_LOG_FILTER: &str = "info";

/// Tally API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiConfig {
    /// Address to bind
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// Number of shards in the receipt store
    pub store_shards: usize,

    /// Tracing filter directive, e.g. `info,tally_api=debug`
    pub log_filter: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            store_shards: DEFAULT_STORE_SHARDS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            host: lookup("TALLY_HOST").unwrap_or(defaults.host),

            port: match lookup("TALLY_PORT") {
                Some(port) => port
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("TALLY_PORT".to_string()))?,
                None => defaults.port,
            },

            store_shards: match lookup("TALLY_STORE_SHARDS") {
                Some(shards) => shards
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("TALLY_STORE_SHARDS".to_string()))?,
                None => defaults.store_shards,
            },

            log_filter: lookup("TALLY_LOG")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_filter),
        };

        if config.store_shards == 0 {
            return Err(ConfigError::InvalidValue("TALLY_STORE_SHARDS".to_string()));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.store_shards, 16);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("TALLY_HOST", "127.0.0.1"),
            ("TALLY_PORT", "9000"),
            ("TALLY_STORE_SHARDS", "4"),
            ("TALLY_LOG", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.store_shards, 4);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rust_log_fallback() {
        let config = ApiConfig::from_lookup(lookup_from(&[("RUST_LOG", "warn")])).unwrap();
        assert_eq!(config.log_filter, "warn");

        let config =
            ApiConfig::from_lookup(lookup_from(&[("RUST_LOG", "warn"), ("TALLY_LOG", "trace")]))
                .unwrap();
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn test_invalid_values() {
        let err = ApiConfig::from_lookup(lookup_from(&[("TALLY_PORT", "http")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for TALLY_PORT");

        let err = ApiConfig::from_lookup(lookup_from(&[("TALLY_PORT", "70000")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for TALLY_PORT");

        let err =
            ApiConfig::from_lookup(lookup_from(&[("TALLY_STORE_SHARDS", "0")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for TALLY_STORE_SHARDS");
    }
}
