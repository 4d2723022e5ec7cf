//! Server configuration
//!
//! Built once at startup from a `.env` file and the process environment,
//! then passed by value into the components that need it.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing::warn;

const DEFAULT_PORT: &str = "8080";
const DEFAULT_DATABASE_PATH: &str = "quotes.db";

/// Which `QuoteStore` backend to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Memory,
    Sqlite,
}

impl StorageMode {
    /// Unknown values fall back to `Memory` with a warning.
    fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("memory") => StorageMode::Memory,
            Some("sqlite") | Some("sql") => StorageMode::Sqlite,
            Some(other) => {
                warn!("Unknown DB_MODE '{}', falling back to memory", other);
                StorageMode::Memory
            }
        }
    }
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageMode::Memory => write!(f, "memory"),
            StorageMode::Sqlite => write!(f, "sqlite"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub storage_mode: StorageMode,
    pub database_path: String,
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    ///
    /// Variables already set in the environment win over `.env` entries.
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => warn!("Ignoring unreadable .env file: {}", e),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_address = non_empty("BIND_ADDRESS").unwrap_or_else(|| {
            let port = non_empty("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
            format!("0.0.0.0:{}", port.trim())
        });

        let storage_mode = StorageMode::parse(lookup("DB_MODE").as_deref());

        let database_path =
            non_empty("DB_PATH").unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());

        Self {
            bind_address,
            storage_mode,
            database_path,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Failed to parse bind address: {}", self.bind_address))
    }
}
