//! Evaluator errors.

/// Errors produced by external evaluator implementations.
///
/// Evaluators are untrusted collaborators (LLM passes, classifiers); the
/// pipeline only needs enough structure to report which call failed and why.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EvaluatorError {
    #[error("Evaluator call failed: {0}")]
    Failed(String),

    #[error("Evaluator returned malformed output: {0}")]
    MalformedOutput(String),
}
