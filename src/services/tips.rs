//! Disposal tips
//!
//! Static advice shown per category. Never mutated, never persisted.

use crate::models::WasteCategory;

const ORGANIC_TIPS: &[&str] = &[
    "Start composting kitchen waste",
    "Plan meals to reduce food waste",
    "Store food properly to extend shelf life",
];

const RECYCLABLE_TIPS: &[&str] = &[
    "Rinse containers before recycling",
    "Flatten cardboard boxes",
    "Check local recycling guidelines",
];

const HAZARDOUS_TIPS: &[&str] = &[
    "Use eco-friendly alternatives",
    "Dispose at designated facilities",
    "Never mix different chemicals",
];

const GENERAL_TIPS: &[&str] = &[
    "Use reusable bags and containers",
    "Avoid single-use items",
    "Buy products with less packaging",
];

/// Tips for a category, in display order
pub fn tips_for(category: WasteCategory) -> &'static [&'static str] {
    match category {
        WasteCategory::Organic => ORGANIC_TIPS,
        WasteCategory::Recyclable => RECYCLABLE_TIPS,
        WasteCategory::Hazardous => HAZARDOUS_TIPS,
        WasteCategory::General => GENERAL_TIPS,
    }
}

/// Tips for a category given by its exact name; unknown names get no tips
pub fn get_tips(category: &str) -> Vec<&'static str> {
    WasteCategory::from_name(category)
        .map(|c| tips_for(c).to_vec())
        .unwrap_or_default()
}
