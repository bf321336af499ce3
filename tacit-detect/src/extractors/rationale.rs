//! Rationale extraction: the first connector clause after a trigger match.

use regex::Regex;
use std::sync::LazyLock;

use super::{truncate_chars, window_after};
use tacit_core::constants::MAX_RATIONALE_CHARS;

static RE_RATIONALE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:because|since|due to|to avoid|for better|so that|in order to|as it)\b\s*([^.;\n]+)",
    )
    .ok()
});

/// First rationale connector clause in the window after `position`,
/// truncated to 200 chars. `None` when no connector follows — callers must
/// never substitute an empty placeholder.
pub fn extract_rationale(text: &str, position: usize) -> Option<String> {
    let window = window_after(text, position);
    let re = RE_RATIONALE.as_ref()?;
    let captures = re.captures(window)?;
    let clause = captures.get(1)?.as_str().trim();
    if clause.is_empty() {
        return None;
    }
    Some(truncate_chars(clause, MAX_RATIONALE_CHARS).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_because_clause() {
        let text = "I chose PostgreSQL over MongoDB because it has better JSON support";
        let rationale = extract_rationale(text, 0).unwrap();
        assert!(rationale.contains("better JSON support"));
    }

    #[test]
    fn first_connector_wins() {
        let text = "going with redis since it's fast, because we know it";
        let rationale = extract_rationale(text, 0).unwrap();
        assert!(rationale.starts_with("it's fast"));
    }

    #[test]
    fn absent_connector_yields_none() {
        assert_eq!(extract_rationale("let's use redis for caching stuff", 0), None);
    }

    #[test]
    fn clause_stops_at_sentence_end() {
        let text = "use redis because it is fast. Also it is popular";
        let rationale = extract_rationale(text, 0).unwrap();
        assert_eq!(rationale, "it is fast");
    }

    #[test]
    fn truncates_to_200_chars() {
        let text = format!("use x because {}", "y".repeat(400));
        let rationale = extract_rationale(&text, 0).unwrap();
        assert_eq!(rationale.chars().count(), 200);
    }
}
