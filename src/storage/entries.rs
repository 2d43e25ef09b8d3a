//! Entry file persistence
//!
//! Round-trips the whole entry collection through waste_data.json. Every
//! write replaces the file with a complete snapshot; reads never fail.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::WasteError;
use crate::models::WasteEntry;

use super::file_io::{quarantine_file, read_json, write_json_atomic};

/// On-disk layout: `{ "entries": [ ... ] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct EntryData {
    entries: Vec<WasteEntry>,
}

/// Borrowed form of [`EntryData`] so writes don't clone the collection
#[derive(Serialize)]
struct EntryDataRef<'a> {
    entries: &'a [WasteEntry],
}

/// Details of an unreadable entries file that was recovered from at load time
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveredCorruption {
    /// Why the file could not be loaded
    pub reason: String,
    /// Where the unreadable file was moved, if it was moved
    pub quarantined_to: Option<PathBuf>,
}

/// Result of reading the entries file
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub entries: Vec<WasteEntry>,
    pub recovered: Option<RecoveredCorruption>,
}

/// Persistence adapter for the entry collection
#[derive(Debug, Clone)]
pub struct EntryFile {
    path: PathBuf,
    quarantine_corrupt: bool,
}

impl EntryFile {
    /// Create an adapter for the given file; corrupt files are moved aside
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            quarantine_corrupt: true,
        }
    }

    /// Choose whether unreadable files are moved aside before starting empty
    pub fn with_quarantine(mut self, enabled: bool) -> Self {
        self.quarantine_corrupt = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored entry
    ///
    /// A missing file yields an empty collection. An unreadable file also
    /// yields an empty collection, logs a warning and is reported through
    /// [`LoadOutcome::recovered`].
    pub fn read(&self) -> LoadOutcome {
        match self.try_read() {
            Ok(entries) => {
                debug!(path = %self.path.display(), count = entries.len(), "loaded waste entries");
                LoadOutcome {
                    entries,
                    recovered: None,
                }
            }
            Err(err) => {
                let reason = match err {
                    WasteError::CorruptData { reason, .. } => reason,
                    other => other.to_string(),
                };
                warn!(
                    path = %self.path.display(),
                    %reason,
                    "entries file is unreadable, starting with an empty log"
                );

                LoadOutcome {
                    entries: Vec::new(),
                    recovered: Some(RecoveredCorruption {
                        quarantined_to: self.move_aside(),
                        reason,
                    }),
                }
            }
        }
    }

    /// Replace the file with a snapshot of `entries`
    pub fn write(&self, entries: &[WasteEntry]) -> Result<(), WasteError> {
        write_json_atomic(&self.path, &EntryDataRef { entries })?;
        debug!(path = %self.path.display(), count = entries.len(), "wrote entries snapshot");
        Ok(())
    }

    fn try_read(&self) -> Result<Vec<WasteEntry>, WasteError> {
        let data: EntryData = match read_json(&self.path)? {
            Some(data) => data,
            None => return Ok(Vec::new()),
        };

        for (i, entry) in data.entries.iter().enumerate() {
            entry.validate().map_err(|e| WasteError::CorruptData {
                path: self.path.clone(),
                reason: format!("entry {}: {}", i, e),
            })?;
        }

        Ok(data.entries)
    }

    fn move_aside(&self) -> Option<PathBuf> {
        if !self.quarantine_corrupt {
            return None;
        }

        match quarantine_file(&self.path) {
            Ok(target) => {
                warn!(moved_to = %target.display(), "moved unreadable entries file aside");
                Some(target)
            }
            Err(e) => {
                error!(error = %e, "failed to move unreadable entries file aside");
                None
            }
        }
    }
}
