//! Fixed weight table and sermon-type normalization policy.
//!
//! Both tables are immutable data: construct once, pass into the aggregator
//! by reference.

use super::types::{ScoreCategory, SermonType};

/// Per-category composite weights, kept in summation order. The standard
/// table sums to exactly 1.0.
#[derive(Debug, Clone)]
pub struct WeightTable {
    entries: Vec<(ScoreCategory, f64)>,
}

impl WeightTable {
    /// The standard PSR weight table.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                (ScoreCategory::BiblicalAccuracy, 0.25),
                (ScoreCategory::TimeInTheWord, 0.20),
                (ScoreCategory::PassageFocus, 0.10),
                (ScoreCategory::Clarity, 0.10),
                (ScoreCategory::Engagement, 0.10),
                (ScoreCategory::Application, 0.10),
                (ScoreCategory::Delivery, 0.10),
                (ScoreCategory::EmotionalRange, 0.05),
            ],
        }
    }

    pub fn get(&self, category: ScoreCategory) -> f64 {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, w)| *w)
            .unwrap_or(0.0)
    }

    /// Entries in summation order.
    pub fn iter(&self) -> impl Iterator<Item = (ScoreCategory, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Additive per-category bumps keyed by sermon type.
///
/// Topical and survey sermons inherently under-score on the three
/// scripture-density categories regardless of underlying quality; the bumps
/// counteract that structural bias. The other five categories are never
/// adjusted.
#[derive(Debug, Clone)]
pub struct NormalizationPolicy {
    expository: [(ScoreCategory, f64); 3],
    topical: [(ScoreCategory, f64); 3],
    survey: [(ScoreCategory, f64); 3],
}

impl NormalizationPolicy {
    pub fn standard() -> Self {
        use ScoreCategory::{BiblicalAccuracy, PassageFocus, TimeInTheWord};
        Self {
            expository: [
                (BiblicalAccuracy, 0.0),
                (TimeInTheWord, 0.0),
                (PassageFocus, 0.0),
            ],
            topical: [
                (BiblicalAccuracy, 5.0),
                (TimeInTheWord, 8.0),
                (PassageFocus, 10.0),
            ],
            survey: [
                (BiblicalAccuracy, 3.0),
                (TimeInTheWord, 5.0),
                (PassageFocus, 12.0),
            ],
        }
    }

    fn table(&self, sermon_type: SermonType) -> &[(ScoreCategory, f64); 3] {
        match sermon_type {
            SermonType::Expository => &self.expository,
            SermonType::Topical => &self.topical,
            SermonType::Survey => &self.survey,
        }
    }

    /// Additive bump for a category; 0 for categories no table covers.
    pub fn bump(&self, sermon_type: SermonType, category: ScoreCategory) -> f64 {
        self.table(sermon_type)
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, b)| *b)
            .unwrap_or(0.0)
    }
}

impl Default for NormalizationPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
