//! Statistics snapshot model
//!
//! Total weight per category. Always carries all four categories.

use serde::Serialize;
use std::collections::BTreeMap;

use super::category::WasteCategory;

/// Total accumulated weight per category, in kilograms
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatisticsSnapshot {
    totals: BTreeMap<WasteCategory, f64>,
}

impl Default for StatisticsSnapshot {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl StatisticsSnapshot {
    /// A snapshot with every category at 0.0
    pub fn zeroed() -> Self {
        Self {
            totals: WasteCategory::all().into_iter().map(|c| (c, 0.0)).collect(),
        }
    }

    /// Add weight to a category's bucket
    pub fn add(&mut self, category: WasteCategory, weight: f64) {
        *self.totals.entry(category).or_insert(0.0) += weight;
    }

    /// Total weight for a category
    pub fn get(&self, category: WasteCategory) -> f64 {
        self.totals.get(&category).copied().unwrap_or(0.0)
    }

    /// Total weight across all categories
    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }

    /// Share of the total weight held by a category (0-100)
    pub fn percentage(&self, category: WasteCategory) -> f64 {
        let total = self.total();
        if total <= 0.0 {
            0.0
        } else {
            self.get(category) / total * 100.0
        }
    }

    /// Heaviest single bucket, used to scale charts
    pub fn max(&self) -> f64 {
        self.totals.values().copied().fold(0.0, f64::max)
    }

    /// Iterate buckets in canonical category order
    pub fn iter(&self) -> impl Iterator<Item = (WasteCategory, f64)> + '_ {
        self.totals.iter().map(|(c, w)| (*c, *w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_has_all_categories() {
        let stats = StatisticsSnapshot::zeroed();
        let buckets: Vec<_> = stats.iter().collect();
        assert_eq!(
            buckets,
            vec![
                (WasteCategory::Organic, 0.0),
                (WasteCategory::Recyclable, 0.0),
                (WasteCategory::Hazardous, 0.0),
                (WasteCategory::General, 0.0),
            ]
        );
        assert_eq!(stats.total(), 0.0);
        assert_eq!(stats.percentage(WasteCategory::Organic), 0.0);
    }

    #[test]
    fn test_add_and_percentage() {
        let mut stats = StatisticsSnapshot::zeroed();
        stats.add(WasteCategory::Organic, 3.0);
        stats.add(WasteCategory::General, 1.0);

        assert_eq!(stats.get(WasteCategory::Organic), 3.0);
        assert_eq!(stats.total(), 4.0);
        assert_eq!(stats.percentage(WasteCategory::Organic), 75.0);
        assert_eq!(stats.max(), 3.0);
    }

    #[test]
    fn test_serializes_as_mapping() {
        let mut stats = StatisticsSnapshot::zeroed();
        stats.add(WasteCategory::Recyclable, 1.5);

        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(
            json,
            r#"{"Organic":0.0,"Recyclable":1.5,"Hazardous":0.0,"General":0.0}"#
        );
    }
}
