//! API configuration

use core_kernel::CoreError;
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// SQLite connection URL
    pub database_url: String,
    /// Maximum pooled database connections
    pub max_connections: u32,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "sqlite://mortgage.db".to_string(),
            max_connections: 5,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Checks that the configuration can start a server
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.host.trim().is_empty() {
            return Err(CoreError::configuration("host must not be empty"));
        }
        if self.database_url.trim().is_empty() {
            return Err(CoreError::configuration("database_url must not be empty"));
        }
        if self.max_connections == 0 {
            return Err(CoreError::configuration("max_connections must be at least 1"));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.database_url, "sqlite://mortgage.db");
        assert_eq!(config.max_connections, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_connections_is_rejected() {
        let config = ApiConfig {
            max_connections: 0,
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_database_url_is_rejected() {
        let config = ApiConfig {
            database_url: " ".to_string(),
            ..ApiConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
