//! # tacit-core
//!
//! Foundation crate for the tacit decision-capture pipeline.
//! Defines all types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::CaptureConfig;
pub use errors::{TacitError, TacitResult};
pub use models::{
    Confidence, DecisionRecord, DetectedIntent, DetectionResult, EntityType, GraphEntity,
    GraphRelation, IdentityContext, Importance, IntentKind, OperationPayload, PrivacyPolicy,
    QueuedGraphOperation, RecordContent, RecordKind, RecordMetadata, RelationType, SharingScope,
};
