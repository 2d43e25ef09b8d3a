//! Entry store
//!
//! Owns the ordered collection of waste entries and is the only writer of
//! the entries file. A single lock serializes `add_entry` together with the
//! snapshot write it triggers, so concurrent callers cannot overwrite each
//! other's entries.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::info;

use crate::error::{WasteError, WasteResult};
use crate::models::{StatisticsSnapshot, WasteCategory, WasteEntry};
use crate::storage::{EntryFile, RecoveredCorruption};

use super::statistics::compute_statistics;
use super::tips;

/// In-memory entry collection backed by the entries file
pub struct EntryStore {
    file: EntryFile,
    entries: RwLock<Vec<WasteEntry>>,
    recovered: Option<RecoveredCorruption>,
}

impl EntryStore {
    /// Open the store, reading the entries file once
    pub fn open(file: EntryFile) -> Self {
        let outcome = file.read();
        Self {
            file,
            entries: RwLock::new(outcome.entries),
            recovered: outcome.recovered,
        }
    }

    /// Set when the entries file was unreadable at startup and the store
    /// started empty
    pub fn recovered_corruption(&self) -> Option<&RecoveredCorruption> {
        self.recovered.as_ref()
    }

    /// Record a new entry for a category given by its exact name
    /// ("Organic", "Recyclable", "Hazardous" or "General")
    ///
    /// Returns [`WasteError::Validation`] without touching the collection
    /// when the category is unknown or the weight is not positive. Returns
    /// [`WasteError::Persistence`] when the entry was added in memory but the
    /// snapshot write failed; the entry is not rolled back.
    pub fn add_entry(
        &self,
        category: &str,
        weight: f64,
        description: &str,
    ) -> WasteResult<WasteEntry> {
        let category: WasteCategory = category.parse()?;
        self.record(category, weight, description)
    }

    /// Record a new entry for an already-parsed category
    pub fn record(
        &self,
        category: WasteCategory,
        weight: f64,
        description: &str,
    ) -> WasteResult<WasteEntry> {
        // Stamp the entry under the lock so insertion order matches time order
        let mut entries = self.write_entries();
        let entry = WasteEntry::new(category, weight, description);
        entry
            .validate()
            .map_err(|e| WasteError::Validation(e.to_string()))?;

        entries.push(entry.clone());
        info!(category = %entry.category(), weight = entry.weight(), "recorded waste entry");

        self.file.write(&entries)?;
        Ok(entry)
    }

    /// All entries, most recent first
    ///
    /// Entries with identical timestamps keep their insertion order.
    pub fn get_sorted_entries(&self) -> Vec<WasteEntry> {
        let mut sorted = self.read_entries().clone();
        sorted.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        sorted
    }

    /// Total weight per category, recomputed from the current entries
    pub fn get_statistics(&self) -> StatisticsSnapshot {
        compute_statistics(&self.read_entries())
    }

    /// Tips for a category given by its exact name; unknown names get no tips
    pub fn get_tips(&self, category: &str) -> Vec<&'static str> {
        tips::get_tips(category)
    }

    /// Number of entries
    pub fn entry_count(&self) -> usize {
        self.read_entries().len()
    }

    // Entries are only ever appended whole, so a poisoned lock still guards
    // a consistent collection.
    fn read_entries(&self) -> RwLockReadGuard<'_, Vec<WasteEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, Vec<WasteEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
