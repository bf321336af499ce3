//! Constraint extraction: requirement clauses following a trigger match.

use regex::Regex;
use std::sync::LazyLock;

use super::{collect_clauses, window_after, ClauseAnchor};
use tacit_core::constants::MAX_CONSTRAINTS;

static RE_CONSTRAINT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:must|needs? to|required(?:\s+to)?)\b").ok());

const MAX_CLAUSE_CHARS: usize = 100;

/// Requirement clauses in the window after `position`, captured from the
/// connector, deduplicated, at most 5. Empty when none follow.
pub fn extract_constraints(text: &str, position: usize) -> Vec<String> {
    let window = window_after(text, position);
    let Some(re) = RE_CONSTRAINT.as_ref() else {
        return Vec::new();
    };
    collect_clauses(
        window,
        re,
        ClauseAnchor::FromConnector,
        MAX_CLAUSE_CHARS,
        MAX_CONSTRAINTS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_must_clause_from_connector() {
        let constraints = extract_constraints("use postgresql, it must support jsonb", 0);
        assert_eq!(constraints, vec!["must support jsonb"]);
    }

    #[test]
    fn multiple_connectors_all_captured() {
        let constraints =
            extract_constraints("we need to ship by friday and it must stay under budget", 0);
        assert_eq!(constraints.len(), 2);
        assert_eq!(constraints[1], "must stay under budget");
    }

    #[test]
    fn duplicates_are_dropped() {
        let constraints = extract_constraints("it must be fast. it must be fast", 0);
        assert_eq!(constraints, vec!["must be fast"]);
    }

    #[test]
    fn capped_at_five() {
        let text = "must a. must b. must c. must d. must e. must f. must g";
        assert_eq!(extract_constraints(text, 0).len(), 5);
    }

    #[test]
    fn no_connector_yields_empty() {
        assert!(extract_constraints("let's use redis for caching", 0).is_empty());
    }
}
