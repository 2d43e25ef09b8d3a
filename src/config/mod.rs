//! Configuration module for the waste tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::WastePaths;
pub use settings::Settings;
