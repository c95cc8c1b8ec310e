//! Server configuration.
//!
//! # Environment Variables
//!
//! - `HOST`: bind address (default `0.0.0.0`)
//! - `PORT`: listening port (default `5000`)
//! - `CLIENT_ORIGIN`: the one browser origin allowed by CORS (default: any)
//! - `STORAGE_MODE`, `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`: see
//!   [`RepositoryConfig`]

use std::env;

use axum::http::HeaderValue;
use thiserror::Error;

use tasko_infrastructure::{ConfigurationError, RepositoryConfig};

use crate::routes::CorsConfig;
use crate::server::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535 (got '{0}')")]
    InvalidPort(String),

    #[error("CLIENT_ORIGIN is not a valid header value: '{0}'")]
    InvalidOrigin(String),

    #[error(transparent)]
    Storage(#[from] ConfigurationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub repository: RepositoryConfig,
}

impl AppConfig {
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a non-numeric or zero port, an origin that
    /// is not a valid header value, or an invalid storage configuration.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let host = read("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match read("PORT") {
            Some(value) => match value.parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort(value)),
            },
            None => DEFAULT_PORT,
        };

        let cors = match read("CLIENT_ORIGIN") {
            Some(origin) => HeaderValue::from_str(&origin)
                .map(CorsConfig::single_origin)
                .map_err(|_| ConfigError::InvalidOrigin(origin))?,
            None => CorsConfig::any_origin(),
        };

        let repository = RepositoryConfig::from_lookup(&lookup)?;

        Ok(Self {
            server: ServerConfig::new(host, port),
            cors,
            repository,
        })
    }
}
