/// Durable-queue errors for the append-only operation log.
///
/// `OperationQueue::enqueue` swallows these into a `false` return; they
/// surface only from the replay path (`pending`).
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("failed to append to queue at {path}: {message}")]
    AppendFailed { path: String, message: String },

    #[error("failed to read queue at {path}: {message}")]
    ReadFailed { path: String, message: String },
}
