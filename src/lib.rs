//! Waste Tracker - household waste log with statistics and disposal tips
//!
//! This library records waste-disposal events (category, weight, note,
//! timestamp), keeps them in a JSON file, and derives per-category totals
//! and static advice for each category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Categories, entries and statistics snapshots
//! - `storage`: JSON file storage for the entry collection
//! - `services`: Entry store, statistics and tips
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `waste` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use waste_tracker::config::WastePaths;
//! use waste_tracker::services::EntryStore;
//! use waste_tracker::storage::EntryFile;
//!
//! # fn main() -> Result<(), waste_tracker::WasteError> {
//! let paths = WastePaths::new()?;
//! let store = EntryStore::open(EntryFile::new(paths.entries_file()));
//! store.add_entry("Organic", 2.5, "vegetable peels")?;
//! println!("{:?}", store.get_statistics());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{WasteError, WasteResult};
