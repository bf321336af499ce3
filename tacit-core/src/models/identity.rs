use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

/// Resolved identity attached verbatim to every record.
///
/// Resolution (config → VCS identity → environment → anonymous fallback)
/// happens in the host; this pipeline only carries the result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IdentityContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub anonymous_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    pub machine_id: String,
}

/// Privacy policy gating how far a record's content may be shared.
///
/// Scope derivation starts from the generalizability rule and is only ever
/// narrowed by this policy, never widened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct PrivacyPolicy {
    pub share_with_team: bool,
    pub share_globally: bool,
    /// Per-category opt-outs; a `false` entry forces local scope for
    /// records in that category.
    pub category_overrides: HashMap<String, bool>,
}

impl Default for PrivacyPolicy {
    fn default() -> Self {
        Self {
            share_with_team: true,
            share_globally: false,
            category_overrides: HashMap::new(),
        }
    }
}

impl PrivacyPolicy {
    /// Whether sharing is allowed at all for the given category.
    pub fn category_allowed(&self, category: &str) -> bool {
        self.category_overrides.get(category).copied().unwrap_or(true)
    }
}
