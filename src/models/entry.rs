//! Waste entry model
//!
//! One recorded disposal event. Entries are immutable once created: the
//! fields are private and only exposed through accessors.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::WasteCategory;
use super::timestamp;

/// A single disposal event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteEntry {
    category: WasteCategory,

    /// Weight in kilograms
    weight: f64,

    description: String,

    /// When the entry was recorded (stored under the `date` key)
    #[serde(rename = "date", with = "timestamp")]
    timestamp: NaiveDateTime,
}

impl WasteEntry {
    /// Create an entry stamped with the current time
    pub fn new(category: WasteCategory, weight: f64, description: impl Into<String>) -> Self {
        Self::with_timestamp(category, weight, description, timestamp::now())
    }

    /// Create an entry with an explicit timestamp
    pub fn with_timestamp(
        category: WasteCategory,
        weight: f64,
        description: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            category,
            weight,
            description: description.into(),
            timestamp,
        }
    }

    pub fn category(&self) -> WasteCategory {
        self.category
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.weight.is_nan() || self.weight.is_infinite() {
            return Err(EntryValidationError::NonFiniteWeight);
        }

        if self.weight <= 0.0 {
            return Err(EntryValidationError::NonPositiveWeight(self.weight));
        }

        Ok(())
    }
}

impl fmt::Display for WasteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2} kg", self.category, self.weight)?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// Validation errors for waste entries
#[derive(Debug, Clone, PartialEq)]
pub enum EntryValidationError {
    NonPositiveWeight(f64),
    NonFiniteWeight,
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveWeight(w) => {
                write!(f, "Weight must be greater than zero (got {})", w)
            }
            Self::NonFiniteWeight => write!(f, "Weight must be a finite number"),
        }
    }
}

impl std::error::Error for EntryValidationError {}
