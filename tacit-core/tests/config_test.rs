//! Config loading tests: defaults, TOML parsing, malformed fallback.

use std::path::Path;

use tacit_core::config::CaptureConfig;

#[test]
fn defaults_are_sane() {
    let config = CaptureConfig::default();
    assert_eq!(config.project, "default");
    assert_eq!(config.source, "user-prompt");
    assert_eq!(config.detection.decision_threshold, 0.7);
    assert_eq!(config.detection.question_threshold, 0.5);
}

#[test]
fn partial_toml_fills_defaults() {
    let raw = r#"
        project = "matter-compiler"

        [detection]
        decision_threshold = 0.8
    "#;
    let config: CaptureConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.project, "matter-compiler");
    assert_eq!(config.detection.decision_threshold, 0.8);
    // Untouched fields keep defaults.
    assert_eq!(config.detection.preference_threshold, 0.7);
    assert_eq!(config.source, "user-prompt");
}

#[test]
fn missing_file_falls_back_to_default() {
    let config = CaptureConfig::load_or_default(Path::new("/nonexistent/tacit.toml"));
    assert_eq!(config.project, "default");
}

#[test]
fn malformed_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tacit.toml");
    std::fs::write(&path, "not [valid toml {{").unwrap();
    let config = CaptureConfig::load_or_default(&path);
    assert_eq!(config.project, "default");
    assert!(CaptureConfig::load(&path).is_err());
}
