//! Evaluator fan-out and the analysis pipeline.
//!
//! The four external evaluator calls (three scoring passes plus the
//! classifier) run concurrently on a fixed-size pool and are joined before
//! aggregation, which never sees partial input.

mod runner;
mod types;

pub use runner::{analyze_transcript, AnalysisPipeline};
pub use types::{AnalysisResult, Evaluator, EvaluatorOutput, EvaluatorStage};
