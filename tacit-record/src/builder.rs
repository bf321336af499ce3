//! DecisionRecord construction: id generation, timestamping, defaulting,
//! and derived sharing metadata.

use chrono::Utc;
use uuid::Uuid;

use tacit_core::models::{
    Confidence, DecisionRecord, DetectedIntent, GraphRelation, IdentityContext, Importance,
    IntentKind, PrivacyPolicy, RecordContent, RecordKind, RecordMetadata,
};

use crate::generalizability::{is_generalizable, sharing_scope};

/// Caller-supplied context for one build. Identity and policy come resolved
/// from the host; everything optional here has a documented default.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    pub identity: IdentityContext,
    pub policy: PrivacyPolicy,
    pub session_id: String,
    pub source: String,
    pub project: String,
    /// Defaults to "general".
    pub category: Option<String>,
    /// Defaults to 0.5.
    pub confidence: Option<Confidence>,
    pub importance: Importance,
    /// Explicit relations carried through to the graph builder verbatim.
    pub relations: Vec<GraphRelation>,
}

/// Build an immutable record from normalized content.
pub fn build(
    kind: RecordKind,
    content: RecordContent,
    entities: Vec<String>,
    ctx: BuildContext,
) -> DecisionRecord {
    let confidence = ctx.confidence.unwrap_or_default();
    let category = ctx.category.unwrap_or_else(|| "general".to_string());

    let generalizable = is_generalizable(confidence, content.why.is_some(), &entities);
    let scope = sharing_scope(generalizable, &ctx.policy, &category);

    DecisionRecord {
        id: generate_id(kind),
        kind,
        content,
        entities,
        relations: ctx.relations,
        identity: ctx.identity,
        metadata: RecordMetadata {
            session_id: ctx.session_id,
            timestamp: Utc::now(),
            confidence,
            source: ctx.source,
            project: ctx.project,
            category,
            importance: ctx.importance,
            is_generalizable: generalizable,
            sharing_scope: scope,
        },
    }
}

/// Build a record straight from a detected intent. Only decision and
/// preference intents normalize into records; the rest return `None`.
pub fn from_intent(intent: &DetectedIntent, mut ctx: BuildContext) -> Option<DecisionRecord> {
    let kind = match intent.kind {
        IntentKind::Decision => RecordKind::Decision,
        IntentKind::Preference => RecordKind::Preference,
        _ => return None,
    };

    if ctx.confidence.is_none() {
        ctx.confidence = Some(intent.confidence);
    }

    let content = RecordContent {
        what: intent.text.clone(),
        why: intent.rationale.clone(),
        alternatives: intent.alternatives.clone(),
        constraints: intent.constraints.clone(),
        tradeoffs: intent.tradeoffs.clone(),
    };

    Some(build(kind, content, intent.entities.clone(), ctx))
}

/// `{kind}-{rand}-{rand}`: typed prefix plus two uuid-derived hex segments.
fn generate_id(kind: RecordKind) -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", kind.prefix(), &hex[..8], &hex[8..16])
}
