//! Service layer for the waste tracker
//!
//! The service layer provides the operations the front ends call: recording
//! entries, listing them, statistics and tips.

pub mod entry;
pub mod statistics;
pub mod tips;

pub use entry::EntryStore;
pub use statistics::compute_statistics;
pub use tips::{get_tips, tips_for};
