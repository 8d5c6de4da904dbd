//! Score aggregator: sermon-type bias correction and weighted composite.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::types::{CompositeResult, RawScores, ScoreCategory, SermonType};
use super::weights::{NormalizationPolicy, WeightTable};
use crate::errors::ScoringError;

/// Combines eight raw category scores and a sermon-type classification into
/// one normalized composite. Pure and deterministic: identical inputs always
/// produce identical output, with no I/O or hidden state.
#[derive(Debug, Clone, Default)]
pub struct ScoreAggregator {
    weights: WeightTable,
    policy: NormalizationPolicy,
}

impl ScoreAggregator {
    pub fn new(weights: WeightTable, policy: NormalizationPolicy) -> Self {
        Self { weights, policy }
    }

    /// Aggregate raw scores under the given sermon type.
    ///
    /// All eight categories must be present; a missing key aborts with
    /// `ScoringError::MissingCategory` rather than substituting a default,
    /// which would silently corrupt the composite.
    ///
    /// Given in-range inputs, every normalized value and the composite lie
    /// in [0,100], and the composite is monotonic non-decreasing in each
    /// category's raw score.
    pub fn aggregate(
        &self,
        raw_scores: &RawScores,
        sermon_type: SermonType,
    ) -> Result<CompositeResult, ScoringError> {
        for &category in ScoreCategory::all() {
            if !raw_scores.contains_key(&category) {
                return Err(ScoringError::MissingCategory(category));
            }
        }

        let mut normalized: FxHashMap<ScoreCategory, f64> = FxHashMap::default();
        let mut composite = 0.0;
        // Sum in weight-table order so the rounded composite is reproducible.
        for (category, weight) in self.weights.iter() {
            let raw = raw_scores
                .get(&category)
                .copied()
                .ok_or(ScoringError::MissingCategory(category))?;
            let value = f64::min(100.0, raw + self.policy.bump(sermon_type, category));
            normalized.insert(category, value);
            composite += value * weight;
        }
        let composite = round1(composite);

        debug!(sermon_type = sermon_type.name(), composite, "scores aggregated");
        Ok(CompositeResult {
            sermon_type,
            normalized_scores: normalized,
            composite,
        })
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
