//! Error handling for psr-core.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod evaluator_error;
pub mod pipeline_error;
pub mod scoring_error;

pub use config_error::ConfigError;
pub use evaluator_error::EvaluatorError;
pub use pipeline_error::PipelineError;
pub use scoring_error::ScoringError;
