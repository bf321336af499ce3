//! Windowed sub-extraction around a matched trigger position.

pub mod alternatives;
pub mod constraints;
pub mod rationale;
pub mod tradeoffs;

pub use alternatives::extract_alternatives;
pub use constraints::extract_constraints;
pub use rationale::extract_rationale;
pub use tradeoffs::extract_tradeoffs;

use tacit_core::constants::EXTRACTION_WINDOW_BYTES;

/// Bounded window following `position`, floored to char boundaries.
pub(crate) fn window_after(text: &str, position: usize) -> &str {
    let start = floor_char_boundary(text, position.min(text.len()));
    let end = floor_char_boundary(text, (start + EXTRACTION_WINDOW_BYTES).min(text.len()));
    &text[start..end]
}

pub(crate) fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Truncate to at most `max` chars, on a char boundary.
pub(crate) fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Where a collected clause starts relative to its connector match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ClauseAnchor {
    /// Keep the connector: "must stay under budget".
    FromConnector,
    /// Drop the connector: "however" → "riskier to operate".
    AfterConnector,
}

/// Collect clauses around each connector match: a clause runs from its
/// anchor to the earliest of clause punctuation, the next connector, or
/// `max_chars`. Deduplicated exactly, capped at `cap`.
pub(crate) fn collect_clauses(
    window: &str,
    connector: &regex::Regex,
    anchor: ClauseAnchor,
    max_chars: usize,
    cap: usize,
) -> Vec<String> {
    let matches: Vec<regex::Match> = connector.find_iter(window).collect();
    let mut out: Vec<String> = Vec::new();

    for (i, m) in matches.iter().enumerate() {
        let start = match anchor {
            ClauseAnchor::FromConnector => m.start(),
            ClauseAnchor::AfterConnector => m.end(),
        };
        let limit = matches
            .get(i + 1)
            .map(|next| next.start())
            .unwrap_or(window.len());
        let region = &window[start..limit];

        let punct_end = region
            .find(['.', ';', ',', '\n'])
            .unwrap_or(region.len());
        let clause = truncate_chars(region[..punct_end].trim(), max_chars)
            .trim()
            .to_string();

        if !clause.is_empty() && !out.contains(&clause) {
            out.push(clause);
        }
        if out.len() == cap {
            break;
        }
    }
    out
}
