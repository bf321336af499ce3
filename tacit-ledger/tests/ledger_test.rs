//! Integration tests for the usage ledger and its manager.

use tacit_ledger::{LedgerManager, UsageLedger};
use tempfile::TempDir;

// ═══════════════════════════════════════════════════════════════════════════
// Manager lifecycle
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn open_record_and_snapshot() {
    let dir = TempDir::new().unwrap();
    let manager = LedgerManager::new(dir.path());

    manager.open_session("s1");
    assert!(manager.record_usage("s1", "architecture", "session-start", 250));
    assert!(manager.record_usage("s1", "testing", "post-tool", 40));

    let ledger = manager.get_ledger("s1").unwrap();
    assert_eq!(ledger.total_tokens, 290);
    assert_eq!(ledger.category_tokens("architecture"), 250);
    assert_eq!(ledger.hook_tokens("post-tool"), 40);
    assert_eq!(ledger.history.len(), 2);
}

#[test]
fn record_against_unknown_session_is_rejected() {
    let dir = TempDir::new().unwrap();
    let manager = LedgerManager::new(dir.path());
    assert!(!manager.record_usage("ghost", "general", "hook", 10));
}

#[test]
fn close_persists_and_drops_the_session() {
    let dir = TempDir::new().unwrap();
    let manager = LedgerManager::new(dir.path());

    manager.open_session("s1");
    manager.record_usage("s1", "general", "session-start", 100);

    let closed = manager.close_session("s1").unwrap().unwrap();
    assert_eq!(closed.total_tokens, 100);
    assert_eq!(manager.session_count(), 0);
    assert!(dir.path().join("s1.json").exists());
}

#[test]
fn reopen_resumes_from_state_file() {
    let dir = TempDir::new().unwrap();
    let manager = LedgerManager::new(dir.path());

    manager.open_session("s1");
    manager.record_usage("s1", "architecture", "session-start", 500);
    manager.persist("s1").unwrap();

    let other = LedgerManager::new(dir.path());
    other.open_session("s1");
    let resumed = other.get_ledger("s1").unwrap();
    assert_eq!(resumed.total_tokens, 500);
    assert_eq!(resumed.category_tokens("architecture"), 500);
}

#[test]
fn malformed_state_file_starts_fresh() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("s1.json"), "{broken").unwrap();

    let manager = LedgerManager::new(dir.path());
    manager.open_session("s1");

    let ledger = manager.get_ledger("s1").unwrap();
    assert_eq!(ledger.total_tokens, 0);
    assert!(ledger.history.is_empty());
}

#[test]
fn persist_unknown_session_reports_false() {
    let dir = TempDir::new().unwrap();
    let manager = LedgerManager::new(dir.path());
    assert!(!manager.persist("ghost").unwrap());
}

#[test]
fn session_ids_tracks_live_sessions() {
    let dir = TempDir::new().unwrap();
    let manager = LedgerManager::new(dir.path());
    manager.open_session("a");
    manager.open_session("b");

    let mut ids = manager.session_ids();
    ids.sort();
    assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
}

// ═══════════════════════════════════════════════════════════════════════════
// History trim across persistence
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn trimmed_history_survives_a_save_load_cycle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("s1.json");

    let mut ledger = UsageLedger::new("s1".to_string());
    for i in 0..101 {
        ledger.record("general", "hook", i);
    }
    ledger.save(&path).unwrap();

    let restored = UsageLedger::load(&path).unwrap().unwrap();
    assert_eq!(restored.history.len(), 80);
    assert_eq!(restored.total_tokens, (0..101).sum::<usize>());
    // Newest entries retained.
    assert_eq!(restored.history.last().map(|e| e.tokens), Some(100));
}
