//! Tradeoff extraction: concession clauses following a trigger match.

use regex::Regex;
use std::sync::LazyLock;

use super::{collect_clauses, window_after, ClauseAnchor};
use tacit_core::constants::MAX_TRADEOFFS;

static RE_TRADEOFF: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:but|however|although|tradeoff(?:\s+is)?|downside(?:\s+is)?)\b[:,]?").ok()
});

const MAX_CLAUSE_CHARS: usize = 100;

/// Concession clauses in the window after `position`, captured after the
/// connector, deduplicated, at most 5. Empty when none follow.
pub fn extract_tradeoffs(text: &str, position: usize) -> Vec<String> {
    let window = window_after(text, position);
    let Some(re) = RE_TRADEOFF.as_ref() else {
        return Vec::new();
    };
    collect_clauses(
        window,
        re,
        ClauseAnchor::AfterConnector,
        MAX_CLAUSE_CHARS,
        MAX_TRADEOFFS,
    )
}
