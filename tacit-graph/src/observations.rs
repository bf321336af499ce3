//! Observation lines for the main entity, in a fixed order the external
//! memory service relies on for display.

use tacit_core::models::DecisionRecord;

/// `What:`, then the optional content lines, then the metadata lines.
/// Optional fields are omitted entirely, never emitted as empty placeholders.
pub fn main_entity_observations(record: &DecisionRecord) -> Vec<String> {
    let mut out = vec![format!("What: {}", record.content.what)];

    if let Some(why) = &record.content.why {
        out.push(format!("Rationale: {why}"));
    }
    if !record.content.alternatives.is_empty() {
        out.push(format!(
            "Alternatives considered: {}",
            record.content.alternatives.join(", ")
        ));
    }
    if !record.content.constraints.is_empty() {
        out.push(format!(
            "Constraints: {}",
            record.content.constraints.join(", ")
        ));
    }
    if !record.content.tradeoffs.is_empty() {
        out.push(format!(
            "Tradeoffs: {}",
            record.content.tradeoffs.join(", ")
        ));
    }

    out.push(format!("Category: {}", record.metadata.category));
    out.push(format!(
        "Confidence: {}",
        record.metadata.confidence.as_percent()
    ));
    out.push(format!("Source: {}", record.metadata.source));
    out
}
