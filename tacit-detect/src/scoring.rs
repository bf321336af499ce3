//! Confidence scoring: one auditable function applying an ordered list of
//! adjustments to a family base value, clamped once at the end.

use tacit_core::models::Confidence;

/// Per-entity boost, diminishing past `ENTITY_BOOST_CAP` entities.
const ENTITY_BOOST: f64 = 0.05;
const ENTITY_BOOST_CAP: usize = 3;
const RATIONALE_BOOST: f64 = 0.10;
const ALTERNATIVES_BOOST: f64 = 0.05;
const STRONG_VERB_BOOST: f64 = 0.10;
/// Spans shorter than this (chars) are penalized as likely noise.
const SHORT_SPAN_CHARS: usize = 15;
const SHORT_SPAN_PENALTY: f64 = -0.10;

/// Evidence gathered for one candidate intent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreSignals {
    pub entity_count: usize,
    pub has_rationale: bool,
    pub has_alternatives: bool,
    pub strong_verb: bool,
    pub span_chars: usize,
}

/// One named adjustment, for auditability in traces and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub reason: &'static str,
    pub delta: f64,
}

/// The ordered adjustment list for a set of signals.
pub fn adjustments(signals: &ScoreSignals) -> Vec<Adjustment> {
    let mut out = Vec::new();
    if signals.entity_count > 0 {
        out.push(Adjustment {
            reason: "entities",
            delta: ENTITY_BOOST * signals.entity_count.min(ENTITY_BOOST_CAP) as f64,
        });
    }
    if signals.has_rationale {
        out.push(Adjustment {
            reason: "rationale",
            delta: RATIONALE_BOOST,
        });
    }
    if signals.has_alternatives {
        out.push(Adjustment {
            reason: "alternatives",
            delta: ALTERNATIVES_BOOST,
        });
    }
    if signals.strong_verb {
        out.push(Adjustment {
            reason: "strong_verb",
            delta: STRONG_VERB_BOOST,
        });
    }
    if signals.span_chars < SHORT_SPAN_CHARS {
        out.push(Adjustment {
            reason: "short_span",
            delta: SHORT_SPAN_PENALTY,
        });
    }
    out
}

/// Apply every adjustment to the base and clamp once.
pub fn score(base: f64, signals: &ScoreSignals) -> Confidence {
    let total: f64 = adjustments(signals).iter().map(|a| a.delta).sum();
    Confidence::new(base + total)
}
