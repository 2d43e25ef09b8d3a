//! User settings for the waste tracker
//!
//! Display preferences and the corrupt-file recovery policy.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::WastePaths;
use crate::error::WasteError;
use crate::storage::file_io::write_json_atomic;

/// User settings, stored as config.json in the base directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Date format used when listing entries (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Width in characters of the bars in the statistics view
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Move an unreadable entries file aside instead of letting the next
    /// write overwrite it
    #[serde(default = "default_quarantine")]
    pub quarantine_corrupt_files: bool,
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_chart_width() -> usize {
    30
}

fn default_quarantine() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            chart_width: default_chart_width(),
            quarantine_corrupt_files: default_quarantine(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &WastePaths) -> Result<Self, WasteError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| WasteError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| WasteError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;

        Ok(settings)
    }

    /// Reject values that would fail later when rendering
    pub fn validate(&self) -> Result<(), WasteError> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(WasteError::Config(format!(
                "Invalid date_format '{}' in settings file",
                self.date_format
            )));
        }

        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WastePaths) -> Result<(), WasteError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
            .map_err(|e| WasteError::Config(format!("Failed to write settings file: {}", e)))
    }
}
