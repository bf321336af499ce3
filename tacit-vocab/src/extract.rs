//! Word-boundary exact entity extraction over the static vocabulary.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::table::{Domain, ALIASES, TERMS};
use tacit_core::models::EntityType;

static DOMAIN_INDEX: LazyLock<HashMap<&'static str, Domain>> =
    LazyLock::new(|| TERMS.iter().copied().collect());

static ALIAS_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ALIASES.iter().copied().collect());

/// Resolve a name to its canonical vocabulary form, if known.
/// Lookup is case-insensitive; aliases collapse to the canonical spelling.
pub fn canonical(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    if let Some(&resolved) = ALIAS_INDEX.get(lower.as_str()) {
        return Some(resolved);
    }
    DOMAIN_INDEX.get_key_value(lower.as_str()).map(|(&k, _)| k)
}

/// Domain group of a canonical or alias name.
pub fn domain_of(name: &str) -> Option<Domain> {
    canonical(name).and_then(|c| DOMAIN_INDEX.get(c).copied())
}

/// Whether a name (canonical or alias) is in the cross-project vocabulary,
/// as opposed to a one-off project-specific name.
pub fn is_known(name: &str) -> bool {
    canonical(name).is_some()
}

/// Graph entity type for a name. Unrecognized names default to Technology.
pub fn entity_type_of(name: &str) -> EntityType {
    domain_of(name).map_or(EntityType::Technology, Domain::entity_type)
}

/// Extract all vocabulary entities mentioned in `text`, in first-occurrence
/// order, alias-resolved and deduplicated case-insensitively.
pub fn extract_entities(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut hits: Vec<(usize, &'static str)> = Vec::new();

    for &(term, _) in TERMS {
        scan(&lower, term, term, &mut hits);
    }
    for &(alias, resolved) in ALIASES {
        scan(&lower, alias, resolved, &mut hits);
    }

    hits.sort_by_key(|&(pos, _)| pos);

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for (_, name) in hits {
        if seen.insert(name) {
            out.push(name.to_string());
        }
    }
    out
}

/// Find word-boundary exact occurrences of `needle` in `haystack`
/// (both lowercase), recording the canonical name per hit.
fn scan(haystack: &str, needle: &str, canonical: &'static str, out: &mut Vec<(usize, &'static str)>) {
    let mut from = 0;
    while let Some(i) = haystack[from..].find(needle) {
        let start = from + i;
        let end = start + needle.len();
        if flanked_by_word_char(haystack, start, end) {
            // `java` inside `javascript`, `go` inside `going` — not a mention.
        } else {
            out.push((start, canonical));
        }
        from = end;
    }
}

/// True if the match at [start, end) touches an alphanumeric neighbor.
fn flanked_by_word_char(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    before.is_some_and(|c| c.is_alphanumeric()) || after.is_some_and(|c| c.is_alphanumeric())
}
