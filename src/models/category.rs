//! Waste category model
//!
//! The closed set of categories every entry and statistics bucket is drawn from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WasteError;

/// Kind of waste being disposed of
///
/// Serialized with the capitalized variant name ("Organic", "Recyclable", ...),
/// which is also the form stored in waste_data.json.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WasteCategory {
    /// Food scraps, garden waste
    Organic,
    /// Paper, glass, metal, plastics accepted by recycling
    Recyclable,
    /// Batteries, chemicals, electronics
    Hazardous,
    /// Everything else
    General,
}

impl WasteCategory {
    /// All categories in canonical order
    pub fn all() -> [WasteCategory; 4] {
        [
            Self::Organic,
            Self::Recyclable,
            Self::Hazardous,
            Self::General,
        ]
    }

    /// Canonical name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organic => "Organic",
            Self::Recyclable => "Recyclable",
            Self::Hazardous => "Hazardous",
            Self::General => "General",
        }
    }

    /// Look up a category by its exact canonical name
    pub fn from_name(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.as_str() == s)
    }

    /// Parse user input: a name in any case or a menu number (1-4)
    pub fn parse_choice(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "organic" | "1" => Some(Self::Organic),
            "recyclable" | "2" => Some(Self::Recyclable),
            "hazardous" | "3" => Some(Self::Hazardous),
            "general" | "4" => Some(Self::General),
            _ => None,
        }
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WasteCategory {
    type Err = WasteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| WasteError::unknown_category(s))
    }
}
