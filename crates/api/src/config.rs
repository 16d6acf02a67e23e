//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MESSENGER_DATABASE_URL` - `SQLite` connection string
//!   (default: `sqlite:messenger.db`; falls back to generic `DATABASE_URL`)
//! - `MESSENGER_HOST` - Bind address (default: 127.0.0.1)
//! - `MESSENGER_PORT` - Listen port (default: 8000)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Messenger service configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `SQLite` database connection URL.
    pub database_url: String,
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("MESSENGER_DATABASE_URL");
        let host = get_env_or_default("MESSENGER_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("MESSENGER_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("MESSENGER_PORT", "8000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("MESSENGER_PORT".to_string(), e.to_string()))?;

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get database URL with fallback to generic `DATABASE_URL`.
///
/// The file named by the default URL is created on startup if absent.
fn get_database_url(primary_key: &str) -> String {
    if let Ok(value) = std::env::var(primary_key) {
        return value;
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return value;
    }
    "sqlite:messenger.db".to_string()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ApiConfig {
            database_url: "sqlite::memory:".to_string(),
            host: "127.0.0.1".parse().unwrap(),
            port: 8000,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    fn test_get_env_or_default_missing() {
        assert_eq!(
            get_env_or_default("MESSENGER_TEST_UNSET_VAR", "fallback"),
            "fallback"
        );
    }
}
