//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `BOOKING_*` environment variables and
//! configuration files. Unset values fall back to the defaults below.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_POOL_CONNECTION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_STATEMENT_TIMEOUT_MS: u64 = 5_000;

/// Unprefixed variable consulted when `BOOKING_DATABASE_URL` is unset.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Runtime configuration for the booking server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKING")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL connection string. Without one the in-memory store is used.
    pub database_url: Option<String>,
    /// Maximum number of pooled connections.
    pub pool_max_size: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_connection_timeout_secs: Option<u64>,
    /// Per-statement timeout in milliseconds; `0` disables it.
    pub statement_timeout_ms: Option<u64>,
    /// Apply embedded migrations at startup.
    pub run_migrations: Option<bool>,
}

impl AppSettings {
    /// Interface to bind, defaulting to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Port to bind.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Database URL from settings, falling back to `DATABASE_URL`.
    ///
    /// Blank values count as unset.
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var(DATABASE_URL_ENV).ok())
            .filter(|url| !url.trim().is_empty())
    }

    /// Maximum pool size.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Pool checkout timeout.
    pub fn pool_connection_timeout(&self) -> Duration {
        Duration::from_secs(
            self.pool_connection_timeout_secs
                .unwrap_or(DEFAULT_POOL_CONNECTION_TIMEOUT_SECS),
        )
    }

    /// Whether to apply embedded migrations at startup. On unless disabled.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Statement timeout applied to every pooled connection, if any.
    pub fn statement_timeout(&self) -> Option<Duration> {
        match self
            .statement_timeout_ms
            .unwrap_or(DEFAULT_STATEMENT_TIMEOUT_MS)
        {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}
