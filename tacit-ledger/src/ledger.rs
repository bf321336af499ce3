//! UsageLedger — token-cost counters and bounded history for one session.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tacit_core::constants::{LEDGER_TRIM_KEEP, LEDGER_TRIM_THRESHOLD};
use tacit_core::errors::{LedgerError, TacitResult};

/// One recorded usage event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEntry {
    /// Knowledge category the tokens were spent on.
    pub category: String,
    /// Host hook that triggered the spend.
    pub hook: String,
    pub tokens: usize,
    pub timestamp: DateTime<Utc>,
}

/// Per-session token accounting, persisted as a session-scoped JSON state
/// file. Counters are cumulative for the session lifetime; the event history
/// is bounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageLedger {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    /// Total tokens recorded this session.
    pub total_tokens: usize,
    /// Tokens per knowledge category.
    pub by_category: HashMap<String, usize>,
    /// Tokens per host hook.
    pub by_hook: HashMap<String, usize>,
    /// Most recent events, oldest first. Trimmed to the newest
    /// `LEDGER_TRIM_KEEP` once it grows past `LEDGER_TRIM_THRESHOLD`.
    pub history: Vec<UsageEntry>,
}

impl UsageLedger {
    pub fn new(session_id: String) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            created_at: now,
            last_activity: now,
            total_tokens: 0,
            by_category: HashMap::new(),
            by_hook: HashMap::new(),
            history: Vec::new(),
        }
    }

    /// Record one usage event, updating counters and history.
    pub fn record(&mut self, category: &str, hook: &str, tokens: usize) {
        self.total_tokens += tokens;
        *self.by_category.entry(category.to_string()).or_insert(0) += tokens;
        *self.by_hook.entry(hook.to_string()).or_insert(0) += tokens;
        self.history.push(UsageEntry {
            category: category.to_string(),
            hook: hook.to_string(),
            tokens,
            timestamp: Utc::now(),
        });
        self.last_activity = Utc::now();
        self.trim_history();
    }

    /// Tokens recorded against one category.
    pub fn category_tokens(&self, category: &str) -> usize {
        self.by_category.get(category).copied().unwrap_or(0)
    }

    /// Tokens recorded against one hook.
    pub fn hook_tokens(&self, hook: &str) -> usize {
        self.by_hook.get(hook).copied().unwrap_or(0)
    }

    fn trim_history(&mut self) {
        if self.history.len() > LEDGER_TRIM_THRESHOLD {
            let drop = self.history.len() - LEDGER_TRIM_KEEP;
            self.history.drain(..drop);
        }
    }

    /// Load a ledger from its state file. Missing file yields `None`.
    pub fn load(path: &Path) -> TacitResult<Option<Self>> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let ledger = serde_json::from_str(&raw).map_err(|e| LedgerError::MalformedState {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(ledger))
    }

    /// Persist the ledger to its state file, creating parent directories.
    pub fn save(&self, path: &Path) -> TacitResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw).map_err(|e| LedgerError::PersistFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_updates_all_counters() {
        let mut ledger = UsageLedger::new("s1".to_string());
        ledger.record("architecture", "session-start", 120);
        ledger.record("testing", "session-start", 30);
        ledger.record("architecture", "pre-compact", 50);

        assert_eq!(ledger.total_tokens, 200);
        assert_eq!(ledger.category_tokens("architecture"), 170);
        assert_eq!(ledger.category_tokens("testing"), 30);
        assert_eq!(ledger.hook_tokens("session-start"), 150);
        assert_eq!(ledger.hook_tokens("pre-compact"), 50);
        assert_eq!(ledger.history.len(), 3);
    }

    #[test]
    fn history_trims_to_most_recent_once_over_threshold() {
        let mut ledger = UsageLedger::new("s1".to_string());
        for i in 0..LEDGER_TRIM_THRESHOLD + 1 {
            ledger.record("general", "hook", i);
        }

        assert_eq!(ledger.history.len(), LEDGER_TRIM_KEEP);
        // Oldest entries were dropped; totals survive the trim.
        assert_eq!(ledger.history[0].tokens, 21);
        assert_eq!(ledger.history.last().map(|e| e.tokens), Some(100));
        assert_eq!(ledger.total_tokens, (0..=100).sum::<usize>());
    }

    #[test]
    fn history_untouched_at_exactly_threshold() {
        let mut ledger = UsageLedger::new("s1".to_string());
        for _ in 0..LEDGER_TRIM_THRESHOLD {
            ledger.record("general", "hook", 1);
        }
        assert_eq!(ledger.history.len(), LEDGER_TRIM_THRESHOLD);
    }

    #[test]
    fn unknown_keys_read_as_zero() {
        let ledger = UsageLedger::new("s1".to_string());
        assert_eq!(ledger.category_tokens("nope"), 0);
        assert_eq!(ledger.hook_tokens("nope"), 0);
    }
}
