/// Pattern-synchronizer errors.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("pattern file at {path} is not valid JSON: {message}")]
    MalformedPatternFile { path: String, message: String },

    #[error("failed to write pattern file at {path}: {message}")]
    WriteFailed { path: String, message: String },
}
