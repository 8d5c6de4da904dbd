//! Plain-text rendering of detection and scoring results.

use std::fmt::Write;

use crate::references::Reference;
use crate::scoring::{CompositeResult, RawScores, ScoreCategory, WeightTable};

/// One reference per line, rendered form plus the pass that found it.
pub fn render_references(references: &[Reference]) -> String {
    let mut out = String::new();
    for reference in references {
        let pass = match reference.detection_pass {
            crate::references::DetectionPass::Explicit => "explicit",
            crate::references::DetectionPass::Spoken => "spoken",
            crate::references::DetectionPass::Contextual => "contextual",
        };
        let _ = writeln!(out, "{reference}  [{pass}]");
    }
    out
}

/// Category table (label, raw, normalized, weight) plus the composite line.
pub fn render_scorecard(
    raw_scores: &RawScores,
    result: &CompositeResult,
    weights: &WeightTable,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sermon type: {}", result.sermon_type);
    let _ = writeln!(out, "{:<20} {:>6} {:>10} {:>7}", "Category", "Raw", "Normalized", "Weight");
    for &category in ScoreCategory::all() {
        let raw = raw_scores.get(&category).copied().unwrap_or(0.0);
        let normalized = result.normalized_scores.get(&category).copied().unwrap_or(0.0);
        let _ = writeln!(
            out,
            "{:<20} {:>6.1} {:>10.1} {:>7.2}",
            category.label(),
            raw,
            normalized,
            weights.get(category)
        );
    }
    let _ = writeln!(out, "Composite: {:.1}", result.composite);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::references::ReferenceDetector;
    use crate::scoring::{ScoreAggregator, SermonType};

    #[test]
    fn test_render_references_lists_pass() {
        let refs = ReferenceDetector::default().detect("Turn to John 3:16 with me.");
        let rendered = render_references(&refs);
        assert_eq!(rendered, "John 3:16  [explicit]\n");
    }

    #[test]
    fn test_render_scorecard_contains_composite_and_labels() {
        use ScoreCategory::*;
        let raw: RawScores = [
            (BiblicalAccuracy, 70.0),
            (TimeInTheWord, 60.0),
            (PassageFocus, 50.0),
            (Clarity, 80.0),
            (Engagement, 65.0),
            (Application, 75.0),
            (Delivery, 70.0),
            (EmotionalRange, 60.0),
        ]
        .into_iter()
        .collect();
        let result = ScoreAggregator::default()
            .aggregate(&raw, SermonType::Topical)
            .unwrap();
        let card = render_scorecard(&raw, &result, &WeightTable::standard());
        assert!(card.contains("Composite: 70.4"));
        assert!(card.contains("Biblical Accuracy"));
        assert!(card.contains("Sermon type: topical"));
    }
}
