//! Scoring types.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The eight fixed rubric categories, in composite summation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    BiblicalAccuracy,
    TimeInTheWord,
    PassageFocus,
    Clarity,
    Engagement,
    Application,
    Delivery,
    EmotionalRange,
}

impl ScoreCategory {
    /// All categories, in the order the composite is summed.
    pub fn all() -> &'static [ScoreCategory] {
        &[
            Self::BiblicalAccuracy,
            Self::TimeInTheWord,
            Self::PassageFocus,
            Self::Clarity,
            Self::Engagement,
            Self::Application,
            Self::Delivery,
            Self::EmotionalRange,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BiblicalAccuracy => "biblical_accuracy",
            Self::TimeInTheWord => "time_in_the_word",
            Self::PassageFocus => "passage_focus",
            Self::Clarity => "clarity",
            Self::Engagement => "engagement",
            Self::Application => "application",
            Self::Delivery => "delivery",
            Self::EmotionalRange => "emotional_range",
        }
    }

    /// Human-readable label for scorecards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BiblicalAccuracy => "Biblical Accuracy",
            Self::TimeInTheWord => "Time In The Word",
            Self::PassageFocus => "Passage Focus",
            Self::Clarity => "Clarity",
            Self::Engagement => "Engagement",
            Self::Application => "Application",
            Self::Delivery => "Delivery",
            Self::EmotionalRange => "Emotional Range",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw category scores in [0,100] as supplied by external evaluators.
/// All eight categories must be present before aggregation.
pub type RawScores = FxHashMap<ScoreCategory, f64>;

/// Coarse content-structure classification of a sermon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SermonType {
    Expository,
    Topical,
    Survey,
}

impl SermonType {
    /// Parse a classifier label. Unrecognized labels fall back to `Topical`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "expository" => Self::Expository,
            "survey" => Self::Survey,
            _ => Self::Topical,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Expository => "expository",
            Self::Topical => "topical",
            Self::Survey => "survey",
        }
    }
}

impl fmt::Display for SermonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification output from the external classifier pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    /// Classifier self-reported confidence, 0-100.
    pub confidence: f64,
}

impl Classification {
    pub fn sermon_type(&self) -> SermonType {
        SermonType::from_label(&self.label)
    }
}

/// Normalized scores plus the weighted composite. Derived and stateless;
/// recomputed fresh on every aggregation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeResult {
    pub sermon_type: SermonType,
    /// Per-category scores after bias correction, each clamped to [0,100].
    pub normalized_scores: FxHashMap<ScoreCategory, f64>,
    /// Weighted composite, rounded to one decimal.
    pub composite: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_label_falls_back_to_topical() {
        assert_eq!(SermonType::from_label("unrecognized"), SermonType::Topical);
        assert_eq!(SermonType::from_label(""), SermonType::Topical);
        assert_eq!(SermonType::from_label("  Expository "), SermonType::Expository);
        assert_eq!(SermonType::from_label("SURVEY"), SermonType::Survey);
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&ScoreCategory::TimeInTheWord).unwrap();
        assert_eq!(json, "\"time_in_the_word\"");
    }
}
