//! Statistics engine
//!
//! Category sums are recomputed from the entries on every call.

use crate::models::{StatisticsSnapshot, WasteEntry};

/// Sum entry weights per category; categories without entries stay at 0.0
pub fn compute_statistics(entries: &[WasteEntry]) -> StatisticsSnapshot {
    let mut stats = StatisticsSnapshot::zeroed();
    for entry in entries {
        stats.add(entry.category(), entry.weight());
    }
    stats
}
