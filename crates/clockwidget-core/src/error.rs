//! Core error types for clockwidget-core.
//!
//! Nothing in this crate is fatal: geometry degeneracies produce empty
//! output instead of errors, and settings failures fall back to defaults.
//! The types here exist so the shell can log failures it chooses to swallow.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for clockwidget-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings-related errors
    #[error("Settings error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No per-user config directory could be resolved
    #[error("No user configuration directory available")]
    NoConfigDir,

    /// Failed to load settings
    #[error("Failed to load settings from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save settings
    #[error("Failed to save settings to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
