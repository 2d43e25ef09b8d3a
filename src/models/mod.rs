//! Core data models for the waste tracker
//!
//! This module contains the data structures of the waste-logging domain:
//! categories, entries and statistics snapshots.

pub mod category;
pub mod entry;
pub mod statistics;
pub mod timestamp;

pub use category::WasteCategory;
pub use entry::{EntryValidationError, WasteEntry};
pub use statistics::StatisticsSnapshot;
