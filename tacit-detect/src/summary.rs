//! Human-readable detection digest.

use tacit_core::models::{DetectionResult, IntentKind};

/// Summary used when input is below the analyzable length.
pub const TOO_SHORT: &str = "too short to analyze";

/// Summary used when no bucket has any intent.
pub const NO_INTENTS: &str = "No intents detected";

/// "2 decisions, 1 question detected", buckets with zero count omitted.
pub fn summarize(result: &DetectionResult) -> String {
    let counts = [
        (IntentKind::Decision, result.decisions.len()),
        (IntentKind::Preference, result.preferences.len()),
        (IntentKind::Problem, result.problems.len()),
        (IntentKind::Question, result.questions.len()),
    ];

    let parts: Vec<String> = counts
        .iter()
        .filter(|&&(_, n)| n > 0)
        .map(|&(kind, n)| {
            if n == 1 {
                format!("1 {}", kind.noun())
            } else {
                format!("{} {}s", n, kind.noun())
            }
        })
        .collect();

    if parts.is_empty() {
        NO_INTENTS.to_string()
    } else {
        format!("{} detected", parts.join(", "))
    }
}
