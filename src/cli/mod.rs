//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod entry;

pub use entry::{handle_add, handle_categories, handle_list, handle_stats, handle_tips};
