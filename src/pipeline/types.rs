//! Pipeline types and the evaluator seam.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::EvaluatorError;
use crate::metrics::TranscriptMetrics;
use crate::references::Reference;
use crate::scoring::{Classification, CompositeResult, RawScores};

/// The four concurrent evaluator stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluatorStage {
    Biblical,
    Structure,
    Delivery,
    Classify,
}

impl EvaluatorStage {
    pub fn all() -> &'static [EvaluatorStage] {
        &[Self::Biblical, Self::Structure, Self::Delivery, Self::Classify]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Biblical => "biblical",
            Self::Structure => "structure",
            Self::Delivery => "delivery",
            Self::Classify => "classify",
        }
    }
}

impl fmt::Display for EvaluatorStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an evaluator stage produced: partial category scores from a scoring
/// pass, or the sermon classification.
#[derive(Debug, Clone)]
pub enum EvaluatorOutput {
    Scores(RawScores),
    Classification(Classification),
}

/// An external judgment source. Implementations wrap whatever actually
/// produces the numbers (an LLM call, a rubric service, a fixture); the
/// pipeline only needs a blocking call per transcript.
pub trait Evaluator: Send + Sync {
    fn stage(&self) -> EvaluatorStage;
    fn evaluate(&self, transcript: &str) -> Result<EvaluatorOutput, EvaluatorError>;
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub references: Vec<Reference>,
    pub metrics: TranscriptMetrics,
    pub raw_scores: RawScores,
    /// Absent when no classify stage ran; aggregation then assumes topical.
    pub classification: Option<Classification>,
    pub scores: CompositeResult,
}
