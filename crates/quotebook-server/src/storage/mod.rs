//! Storage layer
//!
//! Two interchangeable `QuoteStore` backends: a lock-guarded in-memory list
//! and an embedded SQLite database. The backend is chosen once at startup.

pub mod db;
pub mod memory;

pub use db::SqliteStore;
pub use memory::MemoryStore;

use crate::config::{Config, StorageMode};
use anyhow::{Context, Result};
use quotebook_core::QuoteStore;
use std::sync::Arc;

/// Build the store selected by `config`.
///
/// Failure here is a startup error; there is no per-request recovery.
pub async fn open_store(config: &Config) -> Result<Arc<dyn QuoteStore>> {
    match config.storage_mode {
        StorageMode::Memory => {
            tracing::info!("Using in-memory quote store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageMode::Sqlite => {
            tracing::info!("Using SQLite quote store at: {}", config.database_path);
            let store = SqliteStore::open(&config.database_path)
                .await
                .with_context(|| {
                    format!("Failed to open SQLite store at: {}", config.database_path)
                })?;
            Ok(Arc::new(store))
        }
    }
}
