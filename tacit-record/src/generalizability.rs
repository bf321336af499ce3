//! Derived sharing metadata. Generalizability and scope are computed from
//! evidence, never asserted by the caller.

use tacit_core::models::{Confidence, PrivacyPolicy, SharingScope};

/// A record is generalizable only when all three hold: confidence clears the
/// high gate, a rationale is present, and at least one entity belongs to the
/// cross-project vocabulary rather than being a one-off name.
pub fn is_generalizable(confidence: Confidence, has_rationale: bool, entities: &[String]) -> bool {
    confidence.is_high() && has_rationale && entities.iter().any(|e| tacit_vocab::is_known(e))
}

/// Scope derivation: generalizable records start at `Global`, the rest at
/// `Team`; the privacy policy then only narrows. A category the policy has
/// opted out of forces `Local` regardless of evidence.
pub fn sharing_scope(generalizable: bool, policy: &PrivacyPolicy, category: &str) -> SharingScope {
    if !policy.category_allowed(category) {
        return SharingScope::Local;
    }
    if generalizable && policy.share_globally {
        return SharingScope::Global;
    }
    if policy.share_with_team {
        SharingScope::Team
    } else {
        SharingScope::Local
    }
}
