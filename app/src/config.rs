//! Configuration management for Listmark.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Call `dotenvy::dotenv()` first to pick up a local `.env` file, and install
//! the tracing subscriber before loading so fallback warnings are printed.

use listmark_core::environment::DayBoundary;
use serde::{Deserialize, Serialize};
use std::env;

/// Default application name shown in page titles
pub const DEFAULT_APP_NAME: &str = "App";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,listmark=debug,tower_http=debug";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Presentation settings
    pub app: AppConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Seconds to wait for in-flight requests after a shutdown signal
    pub shutdown_timeout: u64,
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Suffix of every page title (`"Work - {name}"`)
    pub name: String,
    /// Timezone that decides which calendar day is "today" for due dates
    pub today: DayBoundary,
}

impl ServerConfig {
    /// `host:port` to bind the listener to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `HOST` | `0.0.0.0` |
    /// | `PORT` | `8080` |
    /// | `SHUTDOWN_TIMEOUT` | `30` |
    /// | `APP_NAME` | `App` |
    /// | `TODAY_UTC_OFFSET` | `local` (`utc` or `±HH:MM` also accepted) |
    ///
    /// Unparsable values fall back to their default; a bad
    /// `TODAY_UTC_OFFSET` is logged.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let today = match lookup("TODAY_UTC_OFFSET") {
            None => DayBoundary::default(),
            Some(raw) => raw.parse().unwrap_or_else(|error| {
                tracing::warn!(%error, "Falling back to the local timezone for due dates");
                DayBoundary::default()
            }),
        };

        Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: lookup("PORT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(8080),
                shutdown_timeout: lookup("SHUTDOWN_TIMEOUT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            },
            app: AppConfig {
                name: lookup("APP_NAME")
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
                today,
            },
        }
    }
}
