//! Server configuration read from environment variables.
//!
//! - `COUNTER_DB_PATH`: SQLite database file path (default: "counter.db")
//! - `COUNTER_PORT`: Server listen port (default: "3000")
//! - `COUNTER_BUSY_TIMEOUT_MS`: how long a request waits on the database
//!   write lock (default: "5000")

use std::time::Duration;

use thiserror::Error;

pub const DB_PATH_VAR: &str = "COUNTER_DB_PATH";
pub const PORT_VAR: &str = "COUNTER_PORT";
pub const BUSY_TIMEOUT_VAR: &str = "COUNTER_BUSY_TIMEOUT_MS";

/// Errors produced while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Runtime configuration of the counter server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file; the store's connection string.
    pub db_path: String,
    /// TCP port to listen on (all interfaces).
    pub port: u16,
    /// Lock wait bound for every store connection.
    pub busy_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: "counter.db".to_string(),
            port: 3000,
            busy_timeout: counter_storage::DEFAULT_BUSY_TIMEOUT,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(DB_PATH_VAR) {
            config.db_path = path;
        }
        if let Some(raw) = lookup(PORT_VAR) {
            config.port = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: PORT_VAR,
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup(BUSY_TIMEOUT_VAR) {
            let millis: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: BUSY_TIMEOUT_VAR,
                value: raw.clone(),
            })?;
            config.busy_timeout = Duration::from_millis(millis);
        }

        Ok(config)
    }

    /// The socket address the server binds.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
