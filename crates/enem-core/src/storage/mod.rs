//! Durable local storage.
//!
//! - [`Database`]: SQLite key/value table in the data directory
//! - [`MemoryStore`]: in-process store for tests and dry runs
//! - [`Entry`]: typed view over one key with a default and a recovery path
//! - [`Config`]: TOML configuration next to the database

mod config;
pub mod database;
pub mod entry;
pub mod memory;

pub use config::{AlertsConfig, ClockConfig, Config, LoggingConfig, ReportConfig};
pub use database::Database;
pub use entry::{Entry, StoredValue, STATE_ENTRY, TAB_ENTRY, THEME_ENTRY};
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::StorageError;

/// Raw string storage keyed by entry name.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Returns the data directory, creating it if needed.
///
/// `ENEM_DATA_DIR` overrides the location entirely. Otherwise the directory
/// is `~/.config/enem-coordinator[-dev]/`, with the `-dev` suffix selected by
/// `ENEM_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("ENEM_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("ENEM_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("enem-coordinator-dev")
            } else {
                base_dir.join("enem-coordinator")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
