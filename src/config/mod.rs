//! Crate configuration.
//!
//! Compiled defaults, optional TOML overrides, then environment overrides,
//! in that order. `validate()` runs last so an env override cannot smuggle
//! in a value the TOML layer would have rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigError;

/// Proximity window for suppressing bare verse numbers that belong to an
/// already-matched citation, in characters.
pub const DEFAULT_CONTEXT_WINDOW_CHARS: usize = 80;
/// Per-evaluator call timeout.
pub const DEFAULT_EVALUATOR_TIMEOUT_SECS: u64 = 120;
/// One worker per evaluator stage.
pub const DEFAULT_PIPELINE_WORKERS: usize = 4;

/// Reference-detector tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub context_window_chars: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            context_window_chars: DEFAULT_CONTEXT_WINDOW_CHARS,
        }
    }
}

/// Evaluator fan-out tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub evaluator_timeout_secs: u64,
    pub workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            evaluator_timeout_secs: DEFAULT_EVALUATOR_TIMEOUT_SECS,
            workers: DEFAULT_PIPELINE_WORKERS,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PsrConfig {
    pub detector: DetectorConfig,
    pub pipeline: PipelineConfig,
}

impl PsrConfig {
    /// Parse a TOML document. Unknown keys are ignored; missing sections
    /// take compiled defaults.
    pub fn from_toml(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration: compiled defaults, the TOML file at `path` if it
    /// exists, then `PSR_*` environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.is_file() {
            let content =
                std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            let parsed: Self =
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            debug!(path = %path.display(), "configuration file loaded");
            parsed
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// `PSR_CONTEXT_WINDOW_CHARS`, `PSR_EVALUATOR_TIMEOUT_SECS` and
    /// `PSR_PIPELINE_WORKERS`. Unparseable values are ignored rather than
    /// fatal; validation still applies afterwards.
    pub fn apply_env_overrides(&mut self) {
        if let Some(value) = env_parse("PSR_CONTEXT_WINDOW_CHARS") {
            self.detector.context_window_chars = value;
        }
        if let Some(value) = env_parse("PSR_EVALUATOR_TIMEOUT_SECS") {
            self.pipeline.evaluator_timeout_secs = value;
        }
        if let Some(value) = env_parse("PSR_PIPELINE_WORKERS") {
            self.pipeline.workers = value;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.detector.context_window_chars == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "detector.context_window_chars".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.pipeline.evaluator_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "pipeline.evaluator_timeout_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.pipeline.workers == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "pipeline.workers".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
