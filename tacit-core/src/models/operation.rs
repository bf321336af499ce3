use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::graph::{GraphEntity, GraphRelation};

/// Payload of a queued mutation, tagged by operation type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "payload")]
#[serde(rename_all = "snake_case")]
pub enum OperationPayload {
    CreateEntities(Vec<GraphEntity>),
    CreateRelations(Vec<GraphRelation>),
}

/// One durable log entry: a pending graph mutation awaiting asynchronous
/// application by the external drainer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QueuedGraphOperation {
    #[serde(flatten)]
    pub payload: OperationPayload,
    pub timestamp: DateTime<Utc>,
}

impl QueuedGraphOperation {
    /// Wrap a payload with the current time.
    pub fn now(payload: OperationPayload) -> Self {
        Self {
            payload,
            timestamp: Utc::now(),
        }
    }

    /// Entities carried by this operation, if it is an entities op.
    pub fn entities(&self) -> Option<&[GraphEntity]> {
        match &self.payload {
            OperationPayload::CreateEntities(e) => Some(e),
            OperationPayload::CreateRelations(_) => None,
        }
    }

    /// Relations carried by this operation, if it is a relations op.
    pub fn relations(&self) -> Option<&[GraphRelation]> {
        match &self.payload {
            OperationPayload::CreateEntities(_) => None,
            OperationPayload::CreateRelations(r) => Some(r),
        }
    }
}
