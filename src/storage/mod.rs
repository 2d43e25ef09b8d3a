//! Storage layer for the waste tracker
//!
//! Provides JSON file storage with atomic writes and recovery from
//! unreadable files.

pub mod entries;
pub mod file_io;

pub use entries::{EntryFile, LoadOutcome, RecoveredCorruption};
pub use file_io::{read_json, write_json_atomic};
