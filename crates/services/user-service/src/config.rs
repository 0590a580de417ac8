//! User service configuration.

use std::env;

use common::{ConfigError, DatabaseConfig, JwtConfig};
use domain::DEFAULT_JWT_EXPIRATION_HOURS;

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Token signing settings
    pub jwt: JwtConfig,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.database.min_connections),
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET")
                    .or_else(|_| env::var("USER_SERVICE_JWT_SECRET"))
                    .unwrap_or_default(),
                expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                    .ok()
                    .and_then(|h| h.parse().ok())
                    .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
            },
            host: env::var("USER_SERVICE_HOST").unwrap_or(defaults.host),
            port: env::var("USER_SERVICE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    /// Check settings that have no safe default.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt.validate()
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}
