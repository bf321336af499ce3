//! LedgerManager — concurrent per-session ledger access via DashMap.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;

use tacit_core::errors::TacitResult;

use crate::ledger::UsageLedger;

/// Thread-safe ledger manager. Live ledgers are held in a `DashMap`; each
/// session persists to its own JSON state file under `state_dir`.
pub struct LedgerManager {
    state_dir: PathBuf,
    ledgers: Arc<DashMap<String, UsageLedger>>,
}

impl LedgerManager {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
            ledgers: Arc::new(DashMap::new()),
        }
    }

    fn state_path(&self, session_id: &str) -> PathBuf {
        self.state_dir.join(format!("{session_id}.json"))
    }

    /// Open a session ledger, resuming from its state file when one exists.
    /// A malformed state file starts the session fresh rather than failing.
    pub fn open_session(&self, session_id: &str) -> String {
        let ledger = match UsageLedger::load(&self.state_path(session_id)) {
            Ok(Some(ledger)) => ledger,
            Ok(None) => UsageLedger::new(session_id.to_string()),
            Err(e) => {
                tracing::warn!(session_id, error = %e, "ledger state unreadable, starting fresh");
                UsageLedger::new(session_id.to_string())
            }
        };
        self.ledgers.insert(session_id.to_string(), ledger);
        session_id.to_string()
    }

    /// Record a usage event in a session. Returns false if session not found.
    pub fn record_usage(&self, session_id: &str, category: &str, hook: &str, tokens: usize) -> bool {
        if let Some(mut entry) = self.ledgers.get_mut(session_id) {
            entry.record(category, hook, tokens);
            true
        } else {
            false
        }
    }

    /// Get a ledger by session ID (cloned snapshot).
    pub fn get_ledger(&self, session_id: &str) -> Option<UsageLedger> {
        self.ledgers.get(session_id).map(|r| r.clone())
    }

    /// Persist one session's ledger to its state file.
    pub fn persist(&self, session_id: &str) -> TacitResult<bool> {
        match self.ledgers.get(session_id) {
            Some(ledger) => {
                ledger.save(&self.state_path(session_id))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Persist and drop a session. Returns the final ledger, if any.
    pub fn close_session(&self, session_id: &str) -> TacitResult<Option<UsageLedger>> {
        match self.ledgers.remove(session_id) {
            Some((_, ledger)) => {
                ledger.save(&self.state_path(session_id))?;
                Ok(Some(ledger))
            }
            None => Ok(None),
        }
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.ledgers.len()
    }

    /// All live session IDs.
    pub fn session_ids(&self) -> Vec<String> {
        self.ledgers.iter().map(|r| r.key().clone()).collect()
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }
}
