mod config;

pub use config::{clock_size_px, Settings};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the per-user settings directory, creating it if needed.
///
/// # Errors
/// Returns an error if no user config location can be resolved or if
/// creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join("clockwidget");

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
