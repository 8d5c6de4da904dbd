//! Score normalization and composite aggregation.
//!
//! Eight fixed rubric categories, a sermon-type bias correction table, and
//! one weighted composite. Pure computation; the scores themselves come from
//! external evaluators.

mod aggregator;
mod types;
mod weights;

pub use aggregator::ScoreAggregator;
pub use types::{Classification, CompositeResult, RawScores, ScoreCategory, SermonType};
pub use weights::{NormalizationPolicy, WeightTable};
