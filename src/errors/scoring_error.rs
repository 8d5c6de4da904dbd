//! Scoring errors.

use crate::scoring::ScoreCategory;

/// Errors that can occur during score aggregation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("Missing category in raw scores: {0}")]
    MissingCategory(ScoreCategory),
}
