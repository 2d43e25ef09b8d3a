//! Entry CLI commands
//!
//! Handlers for recording entries and reading statistics, listings and tips.

use crate::config::Settings;
use crate::display::{format_category_list, format_entry_list, format_statistics, format_tips};
use crate::error::{WasteError, WasteResult};
use crate::models::WasteCategory;
use crate::services::EntryStore;

/// Resolve a category typed by the user: a name in any case or 1-4
pub fn parse_category(input: &str) -> WasteResult<WasteCategory> {
    WasteCategory::parse_choice(input).ok_or_else(|| WasteError::unknown_category(input))
}

/// Record a new entry
pub fn handle_add(
    store: &EntryStore,
    category: &str,
    weight: f64,
    description: Option<&str>,
) -> WasteResult<()> {
    let category = parse_category(category)?;

    match store.add_entry(category.as_str(), weight, description.unwrap_or("")) {
        Ok(entry) => {
            println!("Waste entry added: {}", entry);
            Ok(())
        }
        Err(e) if e.is_persistence() => {
            eprintln!("The entry was recorded in memory but could not be saved to disk.");
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// List entries, most recent first
pub fn handle_list(store: &EntryStore, settings: &Settings, limit: Option<usize>) {
    let mut entries = store.get_sorted_entries();
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    print!("{}", format_entry_list(&entries, &settings.date_format));
}

/// Show per-category totals
pub fn handle_stats(store: &EntryStore, settings: &Settings) {
    let stats = store.get_statistics();
    print!("{}", format_statistics(&stats, settings.chart_width));
}

/// Show tips for a category
pub fn handle_tips(store: &EntryStore, category: &str) -> WasteResult<()> {
    // Reject unknown names here; the store itself just returns no tips
    let parsed = parse_category(category)?;
    let tips = store.get_tips(parsed.as_str());
    print!("{}", format_tips(parsed, &tips));
    Ok(())
}

/// List the available categories
pub fn handle_categories() {
    print!("{}", format_category_list());
}
