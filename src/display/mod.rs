//! Display formatting for terminal output
//!
//! Provides utilities for formatting entries, statistics and tips for
//! terminal display.

pub mod entry;
pub mod format;

pub use entry::{format_category_list, format_entry_list, format_statistics, format_tips};
