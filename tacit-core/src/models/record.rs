use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::confidence::Confidence;
use super::graph::GraphRelation;
use super::identity::IdentityContext;
use super::importance::Importance;

/// The 5 persistable record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    Decision,
    Preference,
    ProblemSolution,
    Pattern,
    Workflow,
}

impl RecordKind {
    /// Id prefix, matching the serialized form.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::Preference => "preference",
            Self::ProblemSolution => "problem-solution",
            Self::Pattern => "pattern",
            Self::Workflow => "workflow",
        }
    }
}

/// Visibility tier a record's content is eligible to be shared at.
/// Derived from confidence and generalizability, never asserted by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SharingScope {
    Local,
    Team,
    Global,
}

/// What was decided, plus the optional why/alternatives/constraints/tradeoffs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordContent {
    pub what: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tradeoffs: Vec<String>,
}

/// Provenance and derived sharing metadata for a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordMetadata {
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
    pub confidence: Confidence,
    /// Where the captured text came from, e.g. "user-prompt" or "agent-output".
    pub source: String,
    pub project: String,
    pub category: String,
    pub importance: Importance,
    pub is_generalizable: bool,
    pub sharing_scope: SharingScope,
}

/// The persisted unit: a normalized, identity-stamped decision.
/// Immutable once built; consumed exactly once by the graph builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecisionRecord {
    /// `{kind}-{rand}-{rand}`; also the main graph entity's name.
    pub id: String,
    pub kind: RecordKind,
    pub content: RecordContent,
    /// Canonical vocabulary entities mentioned by the decision.
    pub entities: Vec<String>,
    /// Explicit relations supplied by the caller, appended verbatim to the
    /// generated relations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<GraphRelation>,
    pub identity: IdentityContext,
    pub metadata: RecordMetadata,
}
