use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::TacitResult;

/// Detection thresholds. Buckets include only intents at or above the
/// threshold for their kind; the flat intent list is unaffected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub decision_threshold: f64,
    pub preference_threshold: f64,
    pub problem_threshold: f64,
    pub question_threshold: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            decision_threshold: defaults::DEFAULT_DECISION_THRESHOLD,
            preference_threshold: defaults::DEFAULT_DECISION_THRESHOLD,
            problem_threshold: defaults::DEFAULT_DIAGNOSTIC_THRESHOLD,
            question_threshold: defaults::DEFAULT_DIAGNOSTIC_THRESHOLD,
        }
    }
}

/// Top-level pipeline configuration, loaded from TOML by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Project label stamped into record metadata.
    pub project: String,
    /// Capture source label, e.g. "user-prompt" or "agent-output".
    pub source: String,
    /// Append-only operation log location.
    pub queue_path: PathBuf,
    pub detection: DetectionConfig,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            project: defaults::DEFAULT_PROJECT.to_string(),
            source: defaults::DEFAULT_SOURCE.to_string(),
            queue_path: PathBuf::from(defaults::DEFAULT_QUEUE_PATH),
            detection: DetectionConfig::default(),
        }
    }
}

impl CaptureConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> TacitResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Load from a TOML file, falling back to defaults if the file is
    /// missing or malformed. Capture must never fail on bad config.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }
}
