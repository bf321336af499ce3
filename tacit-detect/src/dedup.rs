//! Overlap deduplication: one sentence matching two trigger phrases of the
//! same kind must not produce duplicate intents.

use tacit_core::models::DetectedIntent;

/// Collapse candidates of the same kind whose spans overlap by position,
/// keeping the highest-confidence candidate per overlapping cluster.
/// Non-overlapping candidates of the same kind are all retained.
pub fn collapse_overlaps(candidates: Vec<DetectedIntent>) -> Vec<DetectedIntent> {
    let mut sorted = candidates;
    sorted.sort_by(|a, b| (a.kind as usize, a.position).cmp(&(b.kind as usize, b.position)));

    let mut out: Vec<DetectedIntent> = Vec::new();
    for candidate in sorted {
        match out.last_mut() {
            Some(last) if last.kind == candidate.kind && overlaps(last, &candidate) => {
                if candidate.confidence > last.confidence {
                    *last = candidate;
                }
            }
            _ => out.push(candidate),
        }
    }

    out.sort_by_key(|intent| intent.position);
    out
}

fn overlaps(a: &DetectedIntent, b: &DetectedIntent) -> bool {
    let a_end = a.position + a.text.len();
    let b_end = b.position + b.text.len();
    a.position < b_end && b.position < a_end
}
