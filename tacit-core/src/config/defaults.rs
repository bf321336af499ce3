//! Default values shared by config structs.

/// Bucket inclusion threshold for decisions and preferences.
pub const DEFAULT_DECISION_THRESHOLD: f64 = 0.7;

/// Bucket inclusion threshold for problems and questions.
pub const DEFAULT_DIAGNOSTIC_THRESHOLD: f64 = 0.5;

/// Relative path of the operation queue under the local state dir.
pub const DEFAULT_QUEUE_PATH: &str = ".tacit/queue/operations.jsonl";

/// Default project name when the host supplies none.
pub const DEFAULT_PROJECT: &str = "default";

/// Default capture source label.
pub const DEFAULT_SOURCE: &str = "user-prompt";
