mod backend;
mod config;
pub mod database;
mod store;

pub use backend::{DocumentBackend, MemoryBackend};
pub use config::{Config, DisplayConfig, TimerConfig};
pub use database::Database;
pub use store::{StateObserver, StudyStore, DOCUMENT_KEY};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the data directory, creating it if needed.
///
/// `STUDYDECK_HOME` wins when set. Otherwise `~/.config/studydeck[-dev]/`,
/// with the `-dev` suffix when `STUDYDECK_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("STUDYDECK_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("STUDYDECK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("studydeck-dev")
            } else {
                base_dir.join("studydeck")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
