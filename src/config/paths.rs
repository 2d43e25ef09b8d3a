//! Path management for the waste tracker
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `WASTE_TRACKER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/waste-tracker` or `~/.config/waste-tracker`
//! 3. Windows: `%APPDATA%\waste-tracker`

use std::path::PathBuf;

use crate::error::WasteError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "WASTE_TRACKER_DATA_DIR";

/// Manages all paths used by the waste tracker
#[derive(Debug, Clone)]
pub struct WastePaths {
    /// Base directory for all waste tracker data
    base_dir: PathBuf,
}

impl WastePaths {
    /// Create a new WastePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, WasteError> {
        Self::from_override(std::env::var(DATA_DIR_ENV).ok())
    }

    /// Use `custom` as the base directory when given, else the platform default
    pub fn from_override(custom: Option<String>) -> Result<Self, WasteError> {
        let base_dir = match custom {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create WastePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/waste-tracker/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/waste-tracker/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to waste_data.json
    pub fn entries_file(&self) -> PathBuf {
        self.data_dir().join("waste_data.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), WasteError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| WasteError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| WasteError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WasteError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("waste-tracker"));
    }

    let home = std::env::var("HOME")
        .map_err(|_| WasteError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("waste-tracker"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WasteError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WasteError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("waste-tracker"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WastePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_override_sets_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap().to_string();

        let paths = WastePaths::from_override(Some(custom_path)).unwrap();

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.entries_file(),
            temp_dir.path().join("data").join("waste_data.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WastePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WastePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.entries_file(),
            temp_dir.path().join("data").join("waste_data.json")
        );
    }
}
