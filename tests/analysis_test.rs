//! End-to-end analysis scenarios against the public API.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use psr_core::{
    analyze_transcript, AnalysisPipeline, Classification, DetectionPass, Evaluator,
    EvaluatorError, EvaluatorOutput, EvaluatorStage, PipelineError, PsrConfig, RawScores,
    ScoreAggregator, ScoreCategory, SermonType,
};

struct ScorePass {
    stage: EvaluatorStage,
    scores: Vec<(ScoreCategory, f64)>,
}

impl Evaluator for ScorePass {
    fn stage(&self) -> EvaluatorStage {
        self.stage
    }
    fn evaluate(&self, _transcript: &str) -> Result<EvaluatorOutput, EvaluatorError> {
        Ok(EvaluatorOutput::Scores(self.scores.iter().copied().collect()))
    }
}

struct ClassifyPass {
    label: &'static str,
}

impl Evaluator for ClassifyPass {
    fn stage(&self) -> EvaluatorStage {
        EvaluatorStage::Classify
    }
    fn evaluate(&self, _transcript: &str) -> Result<EvaluatorOutput, EvaluatorError> {
        Ok(EvaluatorOutput::Classification(Classification {
            label: self.label.to_string(),
            confidence: 90.0,
        }))
    }
}

struct SleepingPass {
    stage: EvaluatorStage,
    sleep: Duration,
}

impl Evaluator for SleepingPass {
    fn stage(&self) -> EvaluatorStage {
        self.stage
    }
    fn evaluate(&self, _transcript: &str) -> Result<EvaluatorOutput, EvaluatorError> {
        thread::sleep(self.sleep);
        Ok(EvaluatorOutput::Scores(RawScores::default()))
    }
}

fn full_evaluators(label: &'static str) -> Vec<Arc<dyn Evaluator>> {
    use ScoreCategory::*;
    vec![
        Arc::new(ScorePass {
            stage: EvaluatorStage::Biblical,
            scores: vec![
                (BiblicalAccuracy, 70.0),
                (TimeInTheWord, 60.0),
                (PassageFocus, 50.0),
            ],
        }),
        Arc::new(ScorePass {
            stage: EvaluatorStage::Structure,
            scores: vec![(Clarity, 80.0), (Engagement, 65.0), (Application, 75.0)],
        }),
        Arc::new(ScorePass {
            stage: EvaluatorStage::Delivery,
            scores: vec![(Delivery, 70.0), (EmotionalRange, 60.0)],
        }),
        Arc::new(ClassifyPass { label }),
    ]
}

fn sermon_text() -> String {
    let pad = " and the congregation leaned in as the point unfolded slowly".repeat(2);
    format!(
        "We open this morning in Romans 8:28, the promise that holds.{pad} \
         Look down with me at verse 29, the golden chain continues.{pad} \
         Now turn with me to John chapter 3, starting in verse 16, the heart of it all.{pad} \
         And verse 17 tells us why the Son was sent.{pad}"
    )
}

#[test]
fn test_full_run_matches_direct_aggregation() {
    let config = PsrConfig::default();
    let pipeline = AnalysisPipeline::new(&config).unwrap();
    let result = pipeline.run(&sermon_text(), &full_evaluators("topical")).unwrap();

    assert_eq!(result.scores.sermon_type, SermonType::Topical);
    assert_eq!(result.scores.composite, 70.4);

    let direct = ScoreAggregator::default()
        .aggregate(&result.raw_scores, SermonType::Topical)
        .unwrap();
    assert_eq!(result.scores.composite, direct.composite);
    assert_eq!(result.scores.normalized_scores, direct.normalized_scores);
}

#[test]
fn test_mixed_form_references_detected_in_order() {
    let config = PsrConfig::default();
    let pipeline = AnalysisPipeline::new(&config).unwrap();
    let result = pipeline.run(&sermon_text(), &full_evaluators("expository")).unwrap();

    let rendered: Vec<String> = result.references.iter().map(|r| r.to_string()).collect();
    assert_eq!(
        rendered,
        vec!["Romans 8:28", "Romans 8:29", "John 3:16", "John 3:17"]
    );
    assert_eq!(
        result
            .references
            .iter()
            .map(|r| r.detection_pass)
            .collect::<Vec<_>>(),
        vec![
            DetectionPass::Explicit,
            DetectionPass::Contextual,
            DetectionPass::Spoken,
            DetectionPass::Contextual,
        ]
    );
    assert_eq!(result.metrics.references_found, 4);
    assert!(result.metrics.word_count > 0);
    assert_eq!(result.scores.sermon_type, SermonType::Expository);
}

#[test]
fn test_unrecognized_classifier_label_falls_back_to_topical() {
    let config = PsrConfig::default();
    let result = analyze_transcript(
        &config,
        "A short meditation without citations.",
        &full_evaluators("narrative"),
    )
    .unwrap();
    assert_eq!(result.scores.sermon_type, SermonType::Topical);
    assert!(result.references.is_empty());
}

#[test]
fn test_slow_evaluator_times_out_with_stage_name() {
    let mut config = PsrConfig::default();
    config.pipeline.evaluator_timeout_secs = 1;

    let mut evaluators = full_evaluators("topical");
    evaluators[0] = Arc::new(SleepingPass {
        stage: EvaluatorStage::Biblical,
        sleep: Duration::from_millis(1500),
    });

    let err = analyze_transcript(&config, "brief text", &evaluators).unwrap_err();
    match err {
        PipelineError::Timeout { stages, timeout_ms } => {
            assert!(stages.contains("biblical"), "stages was {stages:?}");
            assert_eq!(timeout_ms, 1000);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_failing_evaluator_aborts_with_stage_name() {
    struct Broken;
    impl Evaluator for Broken {
        fn stage(&self) -> EvaluatorStage {
            EvaluatorStage::Structure
        }
        fn evaluate(&self, _transcript: &str) -> Result<EvaluatorOutput, EvaluatorError> {
            Err(EvaluatorError::MalformedOutput("not a score block".to_string()))
        }
    }

    let mut evaluators = full_evaluators("topical");
    evaluators[1] = Arc::new(Broken);
    let err = analyze_transcript(&PsrConfig::default(), "brief text", &evaluators).unwrap_err();
    match err {
        PipelineError::Evaluator { stage, .. } => assert_eq!(stage, "structure"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_incomplete_raw_scores_surface_missing_category() {
    // Drop the delivery stage entirely
    let evaluators: Vec<Arc<dyn Evaluator>> = full_evaluators("topical")
        .into_iter()
        .filter(|e| e.stage() != EvaluatorStage::Delivery)
        .collect();
    let err = analyze_transcript(&PsrConfig::default(), "brief text", &evaluators).unwrap_err();
    assert!(matches!(err, PipelineError::Scoring(_)));
}
