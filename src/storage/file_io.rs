//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::WasteError;

/// Read JSON from a file, returning `None` if the file doesn't exist
///
/// Any failure to open or decode an existing file is reported as
/// [`WasteError::CorruptData`].
pub fn read_json<T, P>(path: P) -> Result<Option<T>, WasteError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let corrupt = |reason: String| WasteError::CorruptData {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path).map_err(|e| corrupt(format!("failed to open: {}", e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| corrupt(e.to_string()))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), WasteError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            WasteError::Persistence(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| WasteError::Persistence(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let written = serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| WasteError::Persistence(format!("Failed to serialize data: {}", e)))
        .and_then(|_| {
            writer
                .flush()
                .map_err(|e| WasteError::Persistence(format!("Failed to flush data: {}", e)))
        })
        .and_then(|_| {
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| WasteError::Persistence(format!("Failed to sync data: {}", e)))
        });

    if let Err(e) = written {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        WasteError::Persistence(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Move an unreadable file aside as `<name>.corrupt-<timestamp>`
///
/// Returns the new location.
pub fn quarantine_file<P: AsRef<Path>>(path: P) -> Result<PathBuf, WasteError> {
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data".to_string());
    let stamp = Local::now().format("%Y%m%dT%H%M%S");

    let mut target = path.with_file_name(format!("{}.corrupt-{}", file_name, stamp));
    let mut n = 1;
    while target.exists() {
        target = path.with_file_name(format!("{}.corrupt-{}-{}", file_name, stamp, n));
        n += 1;
    }

    fs::rename(path, &target).map_err(|e| {
        WasteError::Io(format!(
            "Failed to move {} to {}: {}",
            path.display(),
            target.display(),
            e
        ))
    })?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn sample() -> TestData {
        TestData {
            name: "test".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: Option<TestData> = read_json(&path).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());

        let loaded: Option<TestData> = read_json(&path).unwrap();
        assert_eq!(loaded, Some(sample()));
    }

    #[test]
    fn test_read_invalid_is_corrupt_data() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("invalid.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<TestData, _>(&path).unwrap_err();
        assert!(matches!(err, WasteError::CorruptData { .. }));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let temp_path = temp_dir.path().join("test.json.tmp");

        write_json_atomic(&path, &sample()).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_failure_is_persistence_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let err = write_json_atomic(blocker.join("test.json"), &sample()).unwrap_err();
        assert!(err.is_persistence());
    }

    #[test]
    fn test_quarantine_moves_file_aside() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("waste_data.json");
        fs::write(&path, "{ broken").unwrap();

        let moved = quarantine_file(&path).unwrap();

        assert!(!path.exists());
        assert!(moved.exists());
        assert_eq!(fs::read_to_string(&moved).unwrap(), "{ broken");
        let name = moved.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("waste_data.json.corrupt-"));
    }

    #[test]
    fn test_quarantine_does_not_clobber_previous() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("waste_data.json");

        fs::write(&path, "first").unwrap();
        let first = quarantine_file(&path).unwrap();
        fs::write(&path, "second").unwrap();
        let second = quarantine_file(&path).unwrap();

        assert_ne!(first, second);
        assert_eq!(fs::read_to_string(&first).unwrap(), "first");
        assert_eq!(fs::read_to_string(&second).unwrap(), "second");
    }
}
