//! Alternative extraction from "X over Y" / "X instead of Y" constructions.

use regex::Regex;
use std::sync::LazyLock;

use super::window_after;

static RE_ALTERNATIVE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([A-Za-z0-9][\w.+#-]*)\s+(?:over|instead of)\s+([A-Za-z0-9][\w.+#-]*)").ok()
});

/// Rejected alternatives in the window after `position`, original casing
/// preserved. The chosen side (first capture) is discarded — it already
/// surfaces through entity extraction.
pub fn extract_alternatives(text: &str, position: usize) -> Vec<String> {
    let window = window_after(text, position);
    let Some(re) = RE_ALTERNATIVE.as_ref() else {
        return Vec::new();
    };

    let mut out: Vec<String> = Vec::new();
    for captures in re.captures_iter(window) {
        if let Some(alt) = captures.get(2) {
            let alt = alt.as_str().to_string();
            if !out.iter().any(|seen| seen.eq_ignore_ascii_case(&alt)) {
                out.push(alt);
            }
        }
    }
    out
}
