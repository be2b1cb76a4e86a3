//! Persistent user settings.
//!
//! Stored as JSON at `<config dir>/mockboard/settings.json`. Every field has
//! a default, so partial or older files load cleanly; a missing or malformed
//! file falls back to the defaults with a warning.

use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_ASSET_DIR, DEFAULT_EXPORT_FILE_NAME, DEFAULT_SHIRT_COLOR,
};
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the `Front/` and `Back/` template images
    pub asset_dir: PathBuf,
    /// Shirt color applied at startup, `#rrggbb`
    pub shirt_color: String,
    /// File name suggested by the export dialog
    pub export_file_name: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Open the PDF with the system viewer after a successful export
    pub open_after_export: bool,
    /// Show toasts at full opacity instead of fading them out
    pub reduce_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            shirt_color: DEFAULT_SHIRT_COLOR.to_string(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            open_after_export: true,
            reduce_motion: false,
        }
    }
}

/// `<config dir>/mockboard/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mockboard").join("settings.json"))
}

impl Settings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                warn!("{}", SettingsError::NoConfigDir);
                Self::default()
            }
        }
    }

    /// Load from `path`, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save to the default location.
    pub fn save(&self) -> SettingsResult<()> {
        let path = default_settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Canvas viewport size, never smaller than one pixel.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width.max(1), self.canvas_height.max(1))
    }
}
