mod config;
pub mod results;

pub use config::{CatalogConfig, Config, EngineConfig, InsightsConfig, StorageConfig};
pub use results::{FallbackStore, JsonFileStore, MemoryStore, ResultStore};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the Pathly data directory, creating it if needed.
///
/// `PATHLY_DATA_DIR` overrides the location outright. Otherwise this is
/// `~/.config/pathly/`, or `~/.config/pathly-dev/` when `PATHLY_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("PATHLY_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("PATHLY_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("pathly-dev")
            } else {
                base_dir.join("pathly")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
