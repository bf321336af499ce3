use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::confidence::Confidence;

/// The 5 intent kinds the detector classifies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Decision,
    Preference,
    Problem,
    Question,
    Instruction,
}

impl IntentKind {
    /// Total number of intent kinds.
    pub const COUNT: usize = 5;

    /// All variants for iteration.
    pub const ALL: [IntentKind; 5] = [
        Self::Decision,
        Self::Preference,
        Self::Problem,
        Self::Question,
        Self::Instruction,
    ];

    /// Singular noun for summaries, e.g. "decision".
    pub fn noun(self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::Preference => "preference",
            Self::Problem => "problem",
            Self::Question => "question",
            Self::Instruction => "instruction",
        }
    }
}

/// One detection result: a classified, confidence-scored span of text.
///
/// Transient — created per analysis call, never persisted directly. The
/// rationale/alternatives/constraints/tradeoffs extras are populated only
/// for decision and preference intents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DetectedIntent {
    pub kind: IntentKind,
    /// Matched span, truncated to 300 chars.
    pub text: String,
    pub confidence: Confidence,
    /// Canonical vocabulary entities extracted around the match.
    pub entities: Vec<String>,
    /// Byte offset of the trigger match in the analyzed text.
    pub position: usize,
    /// Why the decision was made, if a connector phrase followed. ≤200 chars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    /// Rejected alternatives from "X over Y" / "X instead of Y" constructions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
    /// Extracted constraint clauses, ≤5.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<String>,
    /// Extracted tradeoff clauses, ≤5.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tradeoffs: Vec<String>,
}
