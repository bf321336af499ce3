use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::intent::{DetectedIntent, IntentKind};

/// Aggregate of all intents found in one text, bucketed by kind.
///
/// Invariant: every bucketed intent also appears in `intents`. Buckets hold
/// only intents that cleared their kind's inclusion threshold; `intents`
/// retains lower-confidence matches for diagnostic visibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DetectionResult {
    pub decisions: Vec<DetectedIntent>,
    pub preferences: Vec<DetectedIntent>,
    pub problems: Vec<DetectedIntent>,
    pub questions: Vec<DetectedIntent>,
    /// Every detected intent regardless of confidence.
    pub intents: Vec<DetectedIntent>,
    /// Human-readable digest, e.g. "2 decisions, 1 question detected".
    pub summary: String,
}

impl DetectionResult {
    /// Empty result with the given summary.
    pub fn empty(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    /// The bucket for a given kind, if that kind has one.
    /// Instruction intents are never bucketed.
    pub fn bucket(&self, kind: IntentKind) -> Option<&[DetectedIntent]> {
        match kind {
            IntentKind::Decision => Some(&self.decisions),
            IntentKind::Preference => Some(&self.preferences),
            IntentKind::Problem => Some(&self.problems),
            IntentKind::Question => Some(&self.questions),
            IntentKind::Instruction => None,
        }
    }

    /// Whether no bucket has any intent.
    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
            && self.preferences.is_empty()
            && self.problems.is_empty()
            && self.questions.is_empty()
    }
}
