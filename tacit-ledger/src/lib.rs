//! # tacit-ledger
//!
//! Per-session token-usage accounting: cumulative counters keyed by knowledge
//! category and host hook, a bounded event history, and a concurrent manager
//! that persists each session to its own JSON state file. Independent of
//! decision capture.

pub mod ledger;
pub mod manager;

pub use ledger::{UsageEntry, UsageLedger};
pub use manager::LedgerManager;
