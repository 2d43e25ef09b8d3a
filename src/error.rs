//! Custom error types for the waste tracker
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for waste tracker operations
#[derive(Error, Debug)]
pub enum WasteError {
    /// Rejected input (unknown category, non-positive weight)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Writing the entries file failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// The entries file exists but could not be read back
    #[error("Corrupt data in {}: {reason}", path.display())]
    CorruptData { path: PathBuf, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl WasteError {
    /// Create a validation error for a category name outside the enumeration
    pub fn unknown_category(name: impl AsRef<str>) -> Self {
        Self::Validation(format!(
            "Unknown waste category '{}' (expected Organic, Recyclable, Hazardous or General)",
            name.as_ref()
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a persistence (write) error
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

impl From<std::io::Error> for WasteError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WasteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for waste tracker operations
pub type WasteResult<T> = Result<T, WasteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WasteError::Validation("weight must be positive".into());
        assert_eq!(err.to_string(), "Validation error: weight must be positive");
        assert!(err.is_validation());
        assert!(!err.is_persistence());
    }

    #[test]
    fn test_unknown_category_error() {
        let err = WasteError::unknown_category("Plastic");
        assert!(err.is_validation());
        assert!(err.to_string().contains("'Plastic'"));
    }

    #[test]
    fn test_corrupt_data_display() {
        let err = WasteError::CorruptData {
            path: PathBuf::from("/tmp/waste_data.json"),
            reason: "expected value at line 1 column 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "Corrupt data in /tmp/waste_data.json: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WasteError = io_err.into();
        assert!(matches!(err, WasteError::Io(_)));
    }
}
