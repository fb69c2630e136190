mod config;
pub mod record;

pub use config::{Config, GoalConfig, QuickAddConfig, StorageConfig};
pub use record::{DailyRecord, RecordStore, DATA_FILE};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/watertrack[-dev]/` based on WATERTRACK_ENV.
///
/// Set WATERTRACK_ENV=dev to use development data directory.
/// WATERTRACK_DATA_DIR replaces the whole path when set.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the data directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("WATERTRACK_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir().ok_or(StorageError::NoDataDir)?.join(".config");
            let env = std::env::var("WATERTRACK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("watertrack-dev")
            } else {
                base_dir.join("watertrack")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::WriteFailed {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
