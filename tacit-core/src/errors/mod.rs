//! Error types, one file per failure domain.

pub mod ledger_error;
pub mod queue_error;
pub mod sync_error;

pub use ledger_error::LedgerError;
pub use queue_error::QueueError;
pub use sync_error::SyncError;

/// Result alias used across the workspace.
pub type TacitResult<T> = Result<T, TacitError>;

/// Top-level error aggregating all failure domains.
///
/// Detection is infallible: no-match and short input are valid results,
/// not errors, so there is no detection variant here.
#[derive(Debug, thiserror::Error)]
pub enum TacitError {
    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
