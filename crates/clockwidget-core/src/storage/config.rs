//! Flat JSON user settings.
//!
//! Persisted at `<user config dir>/clockwidget/config.json` with the
//! original PascalCase field names, so existing settings files keep
//! working. Load failures fall back to defaults and save failures are
//! reported but treated as non-fatal by every caller; the widget never
//! surfaces a settings error to the user.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::ConfigError;

/// User settings for the widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Settings {
    /// "Light" or "Dark"; anything else resolves to Light at apply time.
    pub theme: String,
    pub click_through_enabled: bool,
    /// Overall widget opacity. Appliers clamp to [0.2, 1.0].
    /// TODO: the inherited default of 3.0 is outside that range and always
    /// clamps to fully opaque; confirm whether 1.0 was meant before
    /// changing what existing config files round-trip.
    pub clock_opacity: f64,
    /// "Small", "Medium", or "Large"; see [`clock_size_px`].
    pub clock_size: String,
    /// Pre-fill for the next focus session prompt, minutes in [1, 250].
    pub last_focus_minutes: u32,
    /// Overlay (always-on-top) vs. desktop-background layering.
    pub is_overlay_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "Dark".to_string(),
            click_through_enabled: false,
            clock_opacity: 3.0,
            clock_size: "Large".to_string(),
            last_focus_minutes: 25,
            is_overlay_mode: true,
        }
    }
}

impl Settings {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.json"))
    }

    /// Load from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed. A missing
    /// file is not an error: it yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Persist to an explicit path.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from the default location, falling back to defaults on any
    /// failure. This is the startup path; it never fails.
    pub fn load_or_default() -> Self {
        Self::path()
            .and_then(|p| Self::load(&p))
            .unwrap_or_default()
    }

    /// Persist to the default location.
    ///
    /// # Errors
    /// Returns an error the caller is expected to log and ignore.
    pub fn persist(&self) -> Result<(), ConfigError> {
        self.save(&Self::path()?)
    }

    /// Pixel size selected by the `ClockSize` setting.
    pub fn clock_size_px(&self) -> f64 {
        clock_size_px(&self.clock_size)
    }
}

/// Map a size name to the widget dimension in pixels.
/// Unrecognized names fall back to Large.
pub fn clock_size_px(name: &str) -> f64 {
    match name {
        "Small" => 90.0,
        "Medium" => 140.0,
        _ => 210.0,
    }
}
