//! The matching engine: evaluates every trigger rule uniformly, scores and
//! deduplicates candidates, and buckets them by kind.

use tacit_core::config::DetectionConfig;
use tacit_core::constants::{MAX_INTENT_CHARS, MIN_ANALYZABLE_CHARS};
use tacit_core::models::{DetectedIntent, DetectionResult, IntentKind};

use crate::dedup;
use crate::extractors::{
    extract_alternatives, extract_constraints, extract_rationale, extract_tradeoffs,
};
use crate::rules::{self, TriggerRule};
use crate::scoring::{self, ScoreSignals};
use crate::summary;

/// Intent detector over free-form text. Cheap to construct; stateless
/// across calls.
#[derive(Debug, Clone, Default)]
pub struct Detector {
    config: DetectionConfig,
}

impl Detector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DetectionConfig) -> Self {
        Self { config }
    }

    /// Analyze one text. Never fails: short input and no-match both return
    /// empty results.
    pub fn detect(&self, text: &str) -> DetectionResult {
        if text.trim().chars().count() < MIN_ANALYZABLE_CHARS {
            return DetectionResult::empty(summary::TOO_SHORT);
        }

        let mut candidates = Vec::new();
        for rule in rules::all_rules() {
            let Some(re) = rule.regex.as_ref() else {
                tracing::warn!(family = rule.family, "trigger regex failed to compile");
                continue;
            };
            for m in re.find_iter(text) {
                candidates.push(self.candidate(&rule, text, m.start()));
            }
        }

        let intents = dedup::collapse_overlaps(candidates);

        let mut result = DetectionResult::default();
        for intent in &intents {
            if let Some(threshold) = self.threshold(intent.kind) {
                if intent.confidence.value() >= threshold {
                    match intent.kind {
                        IntentKind::Decision => result.decisions.push(intent.clone()),
                        IntentKind::Preference => result.preferences.push(intent.clone()),
                        IntentKind::Problem => result.problems.push(intent.clone()),
                        IntentKind::Question => result.questions.push(intent.clone()),
                        IntentKind::Instruction => {}
                    }
                }
            }
        }
        result.intents = intents;
        result.summary = summary::summarize(&result);

        tracing::debug!(
            intents = result.intents.len(),
            summary = %result.summary,
            "detection complete"
        );
        result
    }

    /// Bucket inclusion threshold per kind. Instructions are never bucketed.
    fn threshold(&self, kind: IntentKind) -> Option<f64> {
        match kind {
            IntentKind::Decision => Some(self.config.decision_threshold),
            IntentKind::Preference => Some(self.config.preference_threshold),
            IntentKind::Problem => Some(self.config.problem_threshold),
            IntentKind::Question => Some(self.config.question_threshold),
            IntentKind::Instruction => None,
        }
    }

    /// Build one scored candidate for a rule match at `position`.
    fn candidate(&self, rule: &TriggerRule, text: &str, position: usize) -> DetectedIntent {
        let span = span_at(text, position);
        let entities = tacit_vocab::extract_entities(span);

        // Rationale/alternatives/constraints/tradeoffs only make sense on
        // decision-like intents.
        let (rationale, alternatives, constraints, tradeoffs) = match rule.kind {
            IntentKind::Decision | IntentKind::Preference => (
                extract_rationale(text, position),
                extract_alternatives(text, position),
                extract_constraints(text, position),
                extract_tradeoffs(text, position),
            ),
            _ => (None, Vec::new(), Vec::new(), Vec::new()),
        };

        let signals = ScoreSignals {
            entity_count: entities.len(),
            has_rationale: rationale.is_some(),
            has_alternatives: !alternatives.is_empty(),
            strong_verb: rule.strong_verb,
            span_chars: span.chars().count(),
        };

        DetectedIntent {
            kind: rule.kind,
            text: span.to_string(),
            confidence: scoring::score(rule.base_confidence, &signals),
            entities,
            position,
            rationale,
            alternatives,
            constraints,
            tradeoffs,
        }
    }
}

/// Detect with default thresholds.
pub fn detect(text: &str) -> DetectionResult {
    Detector::new().detect(text)
}

/// Span starting at the match position: runs to the end of the sentence,
/// capped at 300 chars. Sentence bounding keeps two intents in adjacent
/// sentences from overlapping into one dedup cluster.
fn span_at(text: &str, position: usize) -> &str {
    let rest = &text[position..];
    let sentence_end = rest.find(['.', '!', '?', '\n']).unwrap_or(rest.len());
    let rest = &rest[..sentence_end];
    match rest.char_indices().nth(MAX_INTENT_CHARS) {
        Some((byte, _)) => &rest[..byte],
        None => rest,
    }
}
