//! Analysis pipeline: detection, metrics, evaluator fan-out, aggregation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::RecvTimeoutError;
use tracing::{debug, warn};

use super::types::{AnalysisResult, Evaluator, EvaluatorOutput, EvaluatorStage};
use crate::config::PsrConfig;
use crate::errors::{ConfigError, PipelineError};
use crate::metrics;
use crate::references::ReferenceDetector;
use crate::scoring::{Classification, RawScores, ScoreAggregator, SermonType};

/// Runs a full transcript analysis. Owns a fixed-size worker pool so
/// fan-out never contends with other rayon users in the process.
pub struct AnalysisPipeline {
    detector: ReferenceDetector,
    aggregator: ScoreAggregator,
    pool: rayon::ThreadPool,
    timeout: Duration,
}

impl AnalysisPipeline {
    pub fn new(config: &PsrConfig) -> Result<Self, PipelineError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.pipeline.workers)
            .thread_name(|i| format!("psr-eval-{i}"))
            .panic_handler(|_| warn!("evaluator worker panicked"))
            .build()
            .map_err(|e| ConfigError::ValidationFailed {
                field: "pipeline.workers".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            detector: ReferenceDetector::new(config.detector.clone()),
            aggregator: ScoreAggregator::default(),
            pool,
            timeout: Duration::from_secs(config.pipeline.evaluator_timeout_secs),
        })
    }

    /// Analyze one transcript: detect references, compute density metrics,
    /// fan the evaluators out, then aggregate.
    ///
    /// Fails fast on the first evaluator error or timeout; sibling results
    /// are discarded. Aggregation only runs once every evaluator has
    /// reported, so it never sees partial input. With no classify stage
    /// among the evaluators the sermon type defaults to topical.
    pub fn run(
        &self,
        transcript: &str,
        evaluators: &[Arc<dyn Evaluator>],
    ) -> Result<AnalysisResult, PipelineError> {
        let references = self.detector.detect(transcript);
        let metrics = metrics::analyze(transcript, &references);
        debug!(
            references = references.len(),
            words = metrics.word_count,
            "detection and metrics complete"
        );

        let (raw_scores, classification) = self.collect_evaluations(transcript, evaluators)?;
        let sermon_type = classification
            .as_ref()
            .map(Classification::sermon_type)
            .unwrap_or(SermonType::Topical);
        let scores = self.aggregator.aggregate(&raw_scores, sermon_type)?;
        debug!(sermon_type = sermon_type.name(), composite = scores.composite, "analysis complete");

        Ok(AnalysisResult {
            references,
            metrics,
            raw_scores,
            classification,
            scores,
        })
    }

    /// Fan the evaluators out on the pool and join them under one deadline.
    fn collect_evaluations(
        &self,
        transcript: &str,
        evaluators: &[Arc<dyn Evaluator>],
    ) -> Result<(RawScores, Option<Classification>), PipelineError> {
        let (tx, rx) = crossbeam_channel::bounded(evaluators.len());
        let text: Arc<str> = Arc::from(transcript);
        for evaluator in evaluators {
            let evaluator = Arc::clone(evaluator);
            let text = Arc::clone(&text);
            let tx = tx.clone();
            self.pool.spawn(move || {
                let result = evaluator.evaluate(&text);
                // The receiver is gone after a fail-fast return; nothing to
                // do with a late result.
                let _ = tx.send((evaluator.stage(), result));
            });
        }
        drop(tx);

        let deadline = Instant::now() + self.timeout;
        let mut pending: Vec<EvaluatorStage> = evaluators.iter().map(|e| e.stage()).collect();
        let mut raw_scores = RawScores::default();
        let mut classification = None;
        while !pending.is_empty() {
            match rx.recv_deadline(deadline) {
                Ok((stage, Ok(output))) => {
                    pending.retain(|s| *s != stage);
                    match output {
                        EvaluatorOutput::Scores(scores) => raw_scores.extend(scores),
                        EvaluatorOutput::Classification(c) => classification = Some(c),
                    }
                }
                Ok((stage, Err(source))) => {
                    return Err(PipelineError::Evaluator {
                        stage: stage.name().to_string(),
                        source,
                    });
                }
                Err(RecvTimeoutError::Timeout) => {
                    let stages = pending
                        .iter()
                        .map(EvaluatorStage::name)
                        .collect::<Vec<_>>()
                        .join(", ");
                    return Err(PipelineError::Timeout {
                        stages,
                        timeout_ms: self.timeout.as_millis() as u64,
                    });
                }
                // Every sender dropped without reporting: a worker panicked
                // or the pool is shutting down.
                Err(RecvTimeoutError::Disconnected) => return Err(PipelineError::Cancelled),
            }
        }
        Ok((raw_scores, classification))
    }
}

/// One-shot convenience: build a pipeline from `config` and analyze a single
/// transcript.
pub fn analyze_transcript(
    config: &PsrConfig,
    transcript: &str,
    evaluators: &[Arc<dyn Evaluator>],
) -> Result<AnalysisResult, PipelineError> {
    AnalysisPipeline::new(config)?.run(transcript, evaluators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvaluatorError;
    use crate::scoring::ScoreCategory;

    struct FixedScores(EvaluatorStage, Vec<(ScoreCategory, f64)>);

    impl Evaluator for FixedScores {
        fn stage(&self) -> EvaluatorStage {
            self.0
        }
        fn evaluate(&self, _transcript: &str) -> Result<EvaluatorOutput, EvaluatorError> {
            Ok(EvaluatorOutput::Scores(self.1.iter().copied().collect()))
        }
    }

    struct FailingStage(EvaluatorStage);

    impl Evaluator for FailingStage {
        fn stage(&self) -> EvaluatorStage {
            self.0
        }
        fn evaluate(&self, _transcript: &str) -> Result<EvaluatorOutput, EvaluatorError> {
            Err(EvaluatorError::Failed("backend unavailable".to_string()))
        }
    }

    fn score_evaluators() -> Vec<Arc<dyn Evaluator>> {
        use ScoreCategory::*;
        vec![
            Arc::new(FixedScores(
                EvaluatorStage::Biblical,
                vec![(BiblicalAccuracy, 70.0), (TimeInTheWord, 60.0), (PassageFocus, 50.0)],
            )),
            Arc::new(FixedScores(
                EvaluatorStage::Structure,
                vec![(Clarity, 80.0), (Engagement, 65.0), (Application, 75.0)],
            )),
            Arc::new(FixedScores(
                EvaluatorStage::Delivery,
                vec![(Delivery, 70.0), (EmotionalRange, 60.0)],
            )),
        ]
    }

    #[test]
    fn test_missing_classifier_defaults_to_topical() {
        let pipeline = AnalysisPipeline::new(&PsrConfig::default()).unwrap();
        let result = pipeline
            .run("A word on hope from Romans 8:28.", &score_evaluators())
            .unwrap();
        assert_eq!(result.scores.sermon_type, SermonType::Topical);
        assert!(result.classification.is_none());
        assert_eq!(result.scores.composite, 70.4);
    }

    #[test]
    fn test_evaluator_failure_names_the_stage() {
        let mut evaluators = score_evaluators();
        evaluators.push(Arc::new(FailingStage(EvaluatorStage::Classify)));
        let pipeline = AnalysisPipeline::new(&PsrConfig::default()).unwrap();
        let err = pipeline.run("short text", &evaluators).unwrap_err();
        match err {
            PipelineError::Evaluator { stage, .. } => assert_eq!(stage, "classify"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_incomplete_scores_fail_aggregation() {
        use ScoreCategory::*;
        let evaluators: Vec<Arc<dyn Evaluator>> = vec![Arc::new(FixedScores(
            EvaluatorStage::Biblical,
            vec![(BiblicalAccuracy, 70.0)],
        ))];
        let pipeline = AnalysisPipeline::new(&PsrConfig::default()).unwrap();
        let err = pipeline.run("short text", &evaluators).unwrap_err();
        assert!(matches!(err, PipelineError::Scoring(_)));
    }
}
