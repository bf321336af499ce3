//! End-to-end detection tests: guards, scenarios, bucketing, dedup.

use tacit_core::config::DetectionConfig;
use tacit_core::models::IntentKind;
use tacit_detect::{detect, Detector};

// ===========================================================================
// Too-short guard
// ===========================================================================

#[test]
fn empty_text_is_too_short() {
    let result = detect("");
    assert!(result.intents.is_empty());
    assert!(result.summary.contains("too short"));
}

#[test]
fn greeting_is_too_short() {
    let result = detect("hi");
    assert!(result.intents.is_empty());
    assert!(result.summary.contains("too short"));
}

#[test]
fn whitespace_padding_does_not_evade_the_guard() {
    let result = detect("   hi   \n\n   ");
    assert!(result.intents.is_empty());
    assert!(result.summary.contains("too short"));
}

// ===========================================================================
// Scenario: decision with rationale and alternative
// ===========================================================================

#[test]
fn decision_with_rationale_and_alternative() {
    let result = detect("I chose PostgreSQL over MongoDB because it has better JSON support");

    assert_eq!(result.decisions.len(), 1, "summary: {}", result.summary);
    let decision = &result.decisions[0];
    assert_eq!(decision.kind, IntentKind::Decision);
    assert!(decision.entities.contains(&"postgresql".to_string()));
    assert!(decision.entities.contains(&"mongodb".to_string()));
    assert!(decision
        .rationale
        .as_deref()
        .unwrap()
        .contains("better JSON support"));
    assert!(decision.alternatives.contains(&"MongoDB".to_string()));
    assert!(decision.confidence.clears_bucket());
}

#[test]
fn weak_decision_with_entity_clears_the_bucket() {
    let result = detect("Let's use PostgreSQL");
    assert_eq!(result.decisions.len(), 1);
    assert_eq!(result.decisions[0].entities, vec!["postgresql"]);
}

#[test]
fn decision_without_evidence_stays_out_of_the_bucket() {
    // Weak verb, no vocabulary entity, no rationale: detected but below 0.7.
    let result = detect("going with the thing we talked about");
    assert!(result.decisions.is_empty());
    assert_eq!(result.intents.len(), 1, "still visible diagnostically");
    assert_eq!(result.intents[0].kind, IntentKind::Decision);
}

// ===========================================================================
// Preference / problem / question families
// ===========================================================================

#[test]
fn preference_with_alternative_and_rationale() {
    let result = detect("I prefer tabs over spaces because they're easier to refactor");
    assert_eq!(result.preferences.len(), 1);
    let pref = &result.preferences[0];
    assert_eq!(pref.alternatives, vec!["spaces"]);
    assert!(pref.rationale.is_some());
}

#[test]
fn never_use_is_a_preference() {
    let result = detect("never use float for money amounts");
    assert_eq!(result.preferences.len(), 1);
}

#[test]
fn problem_keywords_detected() {
    let result = detect("The deploy is failing with a timeout error");
    assert_eq!(result.problems.len(), 1);
    assert_eq!(result.problems[0].kind, IntentKind::Problem);
}

#[test]
fn question_phrases_detected() {
    let result = detect("How do I configure the connection pool?");
    assert_eq!(result.questions.len(), 1);
}

#[test]
fn problem_intents_carry_no_decision_extras() {
    let result = detect("the cache crash happened because memory must be capped");
    let problem = &result.problems[0];
    assert!(problem.rationale.is_none());
    assert!(problem.constraints.is_empty());
}

// ===========================================================================
// Dedup idempotence
// ===========================================================================

#[test]
fn overlapping_triggers_yield_one_decision() {
    let result = detect("I decided to use PostgreSQL because I chose PostgreSQL");
    assert_eq!(result.decisions.len(), 1);
    assert_eq!(
        result
            .intents
            .iter()
            .filter(|i| i.kind == IntentKind::Decision)
            .count(),
        1
    );
}

#[test]
fn rerunning_detection_is_deterministic() {
    let text = "I decided to use PostgreSQL because I chose PostgreSQL";
    let first = detect(text);
    let second = detect(text);
    assert_eq!(first.decisions.len(), second.decisions.len());
    assert_eq!(first.summary, second.summary);
}

#[test]
fn decisions_in_separate_sentences_both_survive() {
    let result =
        detect("We decided to go with PostgreSQL because it scales. I chose Redis over Memcached for caching.");
    assert_eq!(result.decisions.len(), 2, "summary: {}", result.summary);
    assert_eq!(result.summary, "2 decisions detected");
}

// ===========================================================================
// Buckets vs the flat list
// ===========================================================================

#[test]
fn every_bucketed_intent_appears_in_the_flat_list() {
    let result = detect(
        "I chose PostgreSQL over MongoDB because of JSON support. \
         How do I migrate the old data? The importer keeps failing with an error.",
    );
    for kind in [IntentKind::Decision, IntentKind::Problem, IntentKind::Question] {
        for bucketed in result.bucket(kind).unwrap() {
            assert!(
                result.intents.contains(bucketed),
                "{:?} missing from flat list",
                kind
            );
        }
    }
}

#[test]
fn summary_pluralizes_mixed_kinds() {
    let result = detect(
        "I chose PostgreSQL over MongoDB because of JSON support. \
         How do I migrate the old data? The importer keeps failing with an error.",
    );
    assert_eq!(result.decisions.len(), 1);
    assert_eq!(result.questions.len(), 1);
    assert_eq!(result.problems.len(), 1);
    assert_eq!(
        result.summary,
        "1 decision, 1 problem, 1 question detected"
    );
}

#[test]
fn prose_without_triggers_detects_nothing() {
    let result = detect("The quarterly report covers revenue and churn for the team.");
    assert!(result.is_empty());
    assert_eq!(result.summary, "No intents detected");
}

// ===========================================================================
// Config thresholds
// ===========================================================================

#[test]
fn raised_threshold_empties_the_bucket() {
    let detector = Detector::with_config(DetectionConfig {
        decision_threshold: 0.99,
        ..Default::default()
    });
    let result = detector.detect("Let's use PostgreSQL");
    assert!(result.decisions.is_empty());
    assert_eq!(result.intents.len(), 1);
}

#[test]
fn unicode_text_does_not_panic() {
    let result = detect("décidé — let's use postgresql après tout 🚀");
    assert_eq!(result.decisions.len(), 1);
}
