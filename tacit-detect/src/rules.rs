//! Declarative trigger-rule table. One matching engine in `detector`
//! evaluates every rule uniformly; nothing branches per family.

use regex::Regex;
use std::sync::LazyLock;

use tacit_core::models::IntentKind;

/// A compiled trigger-phrase family.
pub struct TriggerRule {
    pub family: &'static str,
    pub kind: IntentKind,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub base_confidence: f64,
    /// Strong commitment verbs ("decided", "chose") earn a scoring boost
    /// over weak ones ("going with").
    pub strong_verb: bool,
}

macro_rules! trigger_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Decision ───────────────────────────────────────────────────────────────
trigger_pattern!(
    RE_DECISION_STRONG,
    r"(?i)\b(?:i|we)?\s*(?:decided to(?:\s+go\s+with)?|chose|i decided|i chose)\b"
);
trigger_pattern!(
    RE_DECISION_WEAK,
    r"(?i)\b(?:let'?s use|going with|will use|opting for|picked|prefer to (?:use|go with))\b"
);

// ── Preference ─────────────────────────────────────────────────────────────
trigger_pattern!(
    RE_PREFERENCE_STRONG,
    r"(?i)\b(?:(?:always|never) use|style should be)\b"
);
trigger_pattern!(
    RE_PREFERENCE_WEAK,
    r"(?i)\b(?:i(?:'d| would)? prefer|i (?:really )?like)\b"
);
trigger_pattern!(RE_PREFERENCE_SWAP, r"(?i)\bdon'?t use\b[^.\n]{0,80}\buse\b");

// ── Problem ────────────────────────────────────────────────────────────────
trigger_pattern!(
    RE_PROBLEM,
    r"(?i)\b(?:error|bug|issue|problem|failing|broken|not working|doesn'?t work|crash(?:es|ed|ing)?|timeout|exception)\b"
);

// ── Question ───────────────────────────────────────────────────────────────
trigger_pattern!(
    RE_QUESTION,
    r"(?i)\b(?:how (?:do|can) i|how to|what (?:is|are|does)|why (?:does|is|do)|where (?:is|are)|when should|can you (?:explain|help))\b"
);

/// The full ordered rule set.
pub fn all_rules() -> Vec<TriggerRule> {
    vec![
        TriggerRule {
            family: "decision_strong",
            kind: IntentKind::Decision,
            regex: &RE_DECISION_STRONG,
            base_confidence: 0.65,
            strong_verb: true,
        },
        TriggerRule {
            family: "decision_weak",
            kind: IntentKind::Decision,
            regex: &RE_DECISION_WEAK,
            base_confidence: 0.65,
            strong_verb: false,
        },
        TriggerRule {
            family: "preference_strong",
            kind: IntentKind::Preference,
            regex: &RE_PREFERENCE_STRONG,
            base_confidence: 0.7,
            strong_verb: false,
        },
        TriggerRule {
            family: "preference_weak",
            kind: IntentKind::Preference,
            regex: &RE_PREFERENCE_WEAK,
            base_confidence: 0.65,
            strong_verb: false,
        },
        TriggerRule {
            family: "preference_swap",
            kind: IntentKind::Preference,
            regex: &RE_PREFERENCE_SWAP,
            base_confidence: 0.7,
            strong_verb: false,
        },
        TriggerRule {
            family: "problem",
            kind: IntentKind::Problem,
            regex: &RE_PROBLEM,
            base_confidence: 0.6,
            strong_verb: false,
        },
        TriggerRule {
            family: "question",
            kind: IntentKind::Question,
            regex: &RE_QUESTION,
            base_confidence: 0.6,
            strong_verb: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_regex_compiles() {
        for rule in all_rules() {
            assert!(
                rule.regex.is_some(),
                "rule {} failed to compile",
                rule.family
            );
        }
    }

    #[test]
    fn decision_strong_matches_chose_constructions() {
        let re = RE_DECISION_STRONG.as_ref().unwrap();
        assert!(re.is_match("I chose PostgreSQL over MongoDB"));
        assert!(re.is_match("we decided to go with axum"));
        assert!(!re.is_match("the chosen one")); // no bare "chosen"
    }

    #[test]
    fn preference_families_split_by_strength() {
        assert!(RE_PREFERENCE_STRONG.as_ref().unwrap().is_match("never use float"));
        assert!(RE_PREFERENCE_WEAK.as_ref().unwrap().is_match("I'd prefer tabs"));
        assert!(!RE_PREFERENCE_STRONG.as_ref().unwrap().is_match("I'd prefer tabs"));
    }

    #[test]
    fn preference_swap_requires_both_halves() {
        let re = RE_PREFERENCE_SWAP.as_ref().unwrap();
        assert!(re.is_match("don't use var, use const instead"));
        assert!(!re.is_match("don't use var"));
    }
}
