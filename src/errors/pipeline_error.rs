//! Pipeline errors.

use super::{ConfigError, EvaluatorError, ScoringError};

/// Errors that can occur during an analysis run.
/// Aggregates subsystem errors via `From` conversions; every variant names
/// the stage that failed. Reference detection never errors, so it has no
/// variant here.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Evaluator stage '{stage}' failed: {source}")]
    Evaluator {
        stage: String,
        #[source]
        source: EvaluatorError,
    },

    #[error("Evaluator stage(s) [{stages}] timed out after {timeout_ms}ms")]
    Timeout { stages: String, timeout_ms: u64 },

    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pipeline cancelled")]
    Cancelled,
}
