//! Entry, statistics and tips formatting
//!
//! Formats the store's read operations for terminal output.

use crate::models::{StatisticsSnapshot, WasteCategory, WasteEntry};

use super::format::{format_bar, format_percentage, format_weight, separator, truncate};

const CATEGORY_WIDTH: usize = 10;
const DESCRIPTION_WIDTH: usize = 40;

/// Format entries as a table, in the order given
pub fn format_entry_list(entries: &[WasteEntry], date_format: &str) -> String {
    if entries.is_empty() {
        return "No waste entries recorded yet.\n\nRun 'waste add <category> <weight>' to record one."
            .to_string();
    }

    let dates: Vec<String> = entries
        .iter()
        .map(|e| e.timestamp().format(date_format).to_string())
        .collect();
    let date_width = dates.iter().map(|d| d.len()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:date_width$}  {:CATEGORY_WIDTH$}  {:>10}  {}\n",
        "Date",
        "Category",
        "Weight",
        "Description",
        date_width = date_width
    ));
    output.push_str(&separator(date_width + CATEGORY_WIDTH + DESCRIPTION_WIDTH + 16));
    output.push('\n');

    for (entry, date) in entries.iter().zip(&dates) {
        output.push_str(&format!(
            "{:date_width$}  {:CATEGORY_WIDTH$}  {:>10}  {}\n",
            date,
            entry.category().as_str(),
            format_weight(entry.weight()),
            truncate(entry.description(), DESCRIPTION_WIDTH),
            date_width = date_width
        ));
    }

    output.push_str(&format!("\nTotal: {} entries\n", entries.len()));
    output
}

/// Format per-category totals with a bar chart and the overall total
pub fn format_statistics(stats: &StatisticsSnapshot, chart_width: usize) -> String {
    let max = stats.max();
    let mut output = String::new();

    output.push_str("Waste by Category\n");
    output.push_str(&separator(CATEGORY_WIDTH + chart_width + 24));
    output.push('\n');

    for (category, weight) in stats.iter() {
        output.push_str(&format!(
            "{:CATEGORY_WIDTH$}  {}  {:>10}  {:>6}\n",
            category.as_str(),
            format_bar(weight, max, chart_width),
            format_weight(weight),
            format_percentage(stats.percentage(category)),
        ));
    }

    output.push_str(&separator(CATEGORY_WIDTH + chart_width + 24));
    output.push('\n');
    output.push_str(&format!(
        "{:CATEGORY_WIDTH$}  {:chart_width$}  {:>10}\n",
        "Total",
        "",
        format_weight(stats.total()),
        chart_width = chart_width
    ));
    output
}

/// Format the numbered tips for a category
pub fn format_tips(category: WasteCategory, tips: &[&str]) -> String {
    let mut output = format!("Tips for {} waste:\n", category);
    for (i, tip) in tips.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, tip));
    }
    output
}

/// Format the category menu (number and name)
pub fn format_category_list() -> String {
    let mut output = String::from("Waste Categories:\n");
    for (i, category) in WasteCategory::all().iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, category));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_entry_list() {
        assert!(format_entry_list(&[], "%Y-%m-%d").starts_with("No waste entries"));
    }

    #[test]
    fn test_entry_list_rows() {
        let ts = NaiveDate::from_ymd_opt(2024, 4, 22)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap();
        let entries = vec![WasteEntry::with_timestamp(
            WasteCategory::Organic,
            2.5,
            "vegetable peels",
            ts,
        )];

        let output = format_entry_list(&entries, "%Y-%m-%d %H:%M");

        assert!(output.contains("2024-04-22 10:15"));
        assert!(output.contains("Organic"));
        assert!(output.contains("2.50 kg"));
        assert!(output.contains("vegetable peels"));
        assert!(output.contains("Total: 1 entries"));
    }

    #[test]
    fn test_statistics_lists_every_category() {
        let mut stats = StatisticsSnapshot::zeroed();
        stats.add(WasteCategory::Organic, 2.5);

        let output = format_statistics(&stats, 10);

        for category in WasteCategory::all() {
            assert!(output.contains(category.as_str()));
        }
        assert!(output.contains("██████████"));
        assert!(output.contains("100%"));
        assert!(output.contains("Total"));
    }

    #[test]
    fn test_tips_are_numbered() {
        let output = format_tips(WasteCategory::General, &["one", "two"]);
        assert_eq!(output, "Tips for General waste:\n  1. one\n  2. two\n");
    }

    #[test]
    fn test_category_list() {
        let output = format_category_list();
        assert!(output.contains("1. Organic"));
        assert!(output.contains("4. General"));
    }
}
