/// Usage-ledger errors for the session state file.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger state file at {path} is not valid JSON: {message}")]
    MalformedState { path: String, message: String },

    #[error("failed to persist ledger state at {path}: {message}")]
    PersistFailed { path: String, message: String },
}
