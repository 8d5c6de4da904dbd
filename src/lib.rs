//! psr-core: Sermon transcript analysis engine
//!
//! This crate provides the core components for PSR (Preached Sermon Rating):
//! - References: Scripture citation detection across explicit, spoken, and
//!   contextual surface forms, with anaphoric resolution
//! - Scoring: Sermon-type bias correction and weighted composite aggregation
//!   over eight fixed rubric categories
//! - Metrics: Scripture density and time-in-the-word estimates
//! - Pipeline: Concurrent evaluator fan-out with timeout and fail-fast join
//! - Report: Plain-text scorecard and reference rendering
//!
//! Transcription, audio feature extraction, and LLM rubric scoring are
//! external collaborators behind the `Evaluator` trait; the core itself is
//! pure computation over in-memory data.

pub mod config;
pub mod errors;
pub mod metrics;
pub mod pipeline;
pub mod references;
pub mod report;
pub mod scoring;
pub mod tracing;

// Re-exports for convenience
pub use config::{DetectorConfig, PipelineConfig, PsrConfig};
pub use errors::{ConfigError, EvaluatorError, PipelineError, ScoringError};
pub use metrics::{MetricsComparison, TranscriptMetrics};
pub use pipeline::{
    analyze_transcript, AnalysisPipeline, AnalysisResult, Evaluator, EvaluatorOutput,
    EvaluatorStage,
};
pub use references::{DetectionPass, Reference, ReferenceDetector};
pub use report::{render_references, render_scorecard};
pub use scoring::{
    Classification, CompositeResult, NormalizationPolicy, RawScores, ScoreAggregator,
    ScoreCategory, SermonType, WeightTable,
};
