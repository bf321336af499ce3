//! Serde shape and invariant tests for the core model types.

use tacit_core::models::*;

#[test]
fn intent_kind_has_5_variants() {
    assert_eq!(IntentKind::COUNT, 5);
    assert_eq!(IntentKind::ALL.len(), 5);
}

#[test]
fn intent_kind_serde_roundtrip() {
    for kind in IntentKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        let back: IntentKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn record_kind_serializes_kebab_case() {
    let json = serde_json::to_string(&RecordKind::ProblemSolution).unwrap();
    assert_eq!(json, "\"problem-solution\"");
    assert_eq!(RecordKind::ProblemSolution.prefix(), "problem-solution");
}

#[test]
fn relation_type_wire_forms() {
    assert_eq!(RelationType::ChoseOver.as_str(), "CHOSE_OVER");
    assert_eq!(RelationType::RelatesTo.as_str(), "RELATES_TO");
    assert_eq!(
        serde_json::to_string(&RelationType::Chose).unwrap(),
        "\"CHOSE\""
    );

    let custom: RelationType = serde_json::from_str("\"IMPLEMENTS\"").unwrap();
    assert_eq!(custom, RelationType::Custom("IMPLEMENTS".to_string()));

    let known: RelationType = serde_json::from_str("\"PREFERS\"").unwrap();
    assert_eq!(known, RelationType::Prefers);
}

#[test]
fn queued_operation_wire_format_is_tagged_and_flattened() {
    let op = QueuedGraphOperation::now(OperationPayload::CreateEntities(vec![GraphEntity {
        name: "decision-ab12cd34-ef56ab78".to_string(),
        entity_type: EntityType::Decision,
        observations: vec!["What: use postgresql".to_string()],
    }]));

    let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&op).unwrap()).unwrap();
    assert_eq!(json["type"], "create_entities");
    assert!(json["payload"].is_array());
    assert!(json["timestamp"].is_string());
}

#[test]
fn relation_serializes_with_camel_case_keys() {
    let rel = GraphRelation::new("a", "b", RelationType::RelatesTo);
    let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&rel).unwrap()).unwrap();
    assert_eq!(json["relationType"], "RELATES_TO");
    assert_eq!(json["from"], "a");
    assert_eq!(json["to"], "b");
}

#[test]
fn confidence_clamps_and_compares() {
    assert_eq!(Confidence::new(1.5).value(), 1.0);
    assert_eq!(Confidence::new(-0.2).value(), 0.0);
    assert!(Confidence::new(0.85).is_high());
    assert!(!Confidence::new(0.79).is_high());
    assert!(Confidence::new(0.7).clears_bucket());
    assert_eq!(Confidence::new(0.85).as_percent(), "85%");
}

#[test]
fn confidence_defaults_to_medium() {
    assert_eq!(Confidence::default().value(), Confidence::MEDIUM);
}

#[test]
fn privacy_policy_defaults_allow_team_only() {
    let policy = PrivacyPolicy::default();
    assert!(policy.share_with_team);
    assert!(!policy.share_globally);
    assert!(policy.category_allowed("general"));
}

#[test]
fn detection_result_bucket_lookup() {
    let result = DetectionResult::empty("No intents detected");
    assert!(result.is_empty());
    assert!(result.bucket(IntentKind::Decision).unwrap().is_empty());
    assert!(result.bucket(IntentKind::Instruction).is_none());
}

mod properties {
    use proptest::prelude::*;
    use tacit_core::models::Confidence;

    proptest! {
        #[test]
        fn confidence_always_in_unit_interval(v in -10.0f64..10.0) {
            let c = Confidence::new(v);
            prop_assert!((0.0..=1.0).contains(&c.value()));
        }

        #[test]
        fn confidence_add_stays_clamped(a in 0.0f64..1.0, b in 0.0f64..1.0) {
            let sum = Confidence::new(a) + Confidence::new(b);
            prop_assert!(sum.value() <= 1.0);
        }
    }
}
