pub mod confidence;
pub mod detection;
pub mod graph;
pub mod identity;
pub mod importance;
pub mod intent;
pub mod operation;
pub mod record;

pub use confidence::Confidence;
pub use detection::DetectionResult;
pub use graph::{EntityType, GraphEntity, GraphRelation, RelationType};
pub use identity::{IdentityContext, PrivacyPolicy};
pub use importance::Importance;
pub use intent::{DetectedIntent, IntentKind};
pub use operation::{OperationPayload, QueuedGraphOperation};
pub use record::{DecisionRecord, RecordContent, RecordKind, RecordMetadata, SharingScope};
