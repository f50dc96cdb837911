//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use phrasebook_core::{ErrorDisclosure, DEFAULT_MAX_LIMIT};
use phrasebook_db::{DbConfig, DbError};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Interface to bind
    pub bind_addr: IpAddr,

    /// HTTP port
    pub port: u16,

    /// Allowed CORS origins; `None` allows any origin
    pub cors_origins: Option<Vec<String>>,

    /// How store errors are reported to clients
    pub disclosure: ErrorDisclosure,

    /// Upper bound for the `limit` query parameter
    pub max_page_limit: u32,

    /// Database connection settings
    pub db: DbConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        ApiConfig::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut db = DbConfig::from_lookup(&lookup)?;
        db.run_migrations = parse_or(&lookup, "RUN_MIGRATIONS", true)?;

        let sanitize: bool = parse_or(&lookup, "SANITIZE_ERRORS", false)?;

        let max_page_limit: u32 = parse_or(&lookup, "MAX_PAGE_LIMIT", DEFAULT_MAX_LIMIT)?;
        if max_page_limit == 0 {
            return Err(ConfigError::InvalidValue("MAX_PAGE_LIMIT".to_string()));
        }

        Ok(ApiConfig {
            bind_addr: parse_or(&lookup, "BIND_ADDR", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            cors_origins: lookup("CORS").and_then(|raw| parse_origins(&raw)),
            disclosure: if sanitize {
                ErrorDisclosure::Sanitized
            } else {
                ErrorDisclosure::Verbatim
            },
            max_page_limit,
            db,
        })
    }

    /// Socket address the server listens on.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_origins: None,
            disclosure: ErrorDisclosure::default(),
            max_page_limit: DEFAULT_MAX_LIMIT,
            db: DbConfig::default(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Splits a comma-separated origin list. `*` (or nothing usable) means any.
fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        None
    } else {
        Some(origins)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error(transparent)]
    Database(#[from] DbError),
}
