//! # tacit-queue
//!
//! Durable operation queue: one JSON operation per line, UTF-8, newline
//! terminated, appended to a local log file. At-least-once semantics — a
//! crash between append and the external drainer's read leaves the line on
//! disk for replay. No dedup here; idempotency is the drainer's problem.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tacit_core::errors::{QueueError, TacitResult};
use tacit_core::models::QueuedGraphOperation;

/// Append-only queue over a local log file.
///
/// Concurrent writers from separate processes are safe as long as each line
/// stays below the filesystem's atomic append size: every enqueue is a
/// single `write` of one complete line in append mode.
#[derive(Debug, Clone)]
pub struct OperationQueue {
    path: PathBuf,
}

impl OperationQueue {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one operation. Returns `false` on any failure — decision
    /// capture is a best-effort side channel and must never abort the
    /// caller's primary task.
    pub fn enqueue(&self, op: &QueuedGraphOperation) -> bool {
        match self.try_enqueue(op) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "queue append failed");
                false
            }
        }
    }

    /// Append a batch in order. Returns how many made it to disk; stops at
    /// the first failure so the log never has holes within one record.
    pub fn enqueue_all(&self, ops: &[QueuedGraphOperation]) -> usize {
        for (i, op) in ops.iter().enumerate() {
            if !self.enqueue(op) {
                return i;
            }
        }
        ops.len()
    }

    fn try_enqueue(&self, op: &QueuedGraphOperation) -> TacitResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_string(op)?;
        line.push('\n');

        let append = || -> std::io::Result<()> {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            // One write of the whole line; append mode keeps concurrent
            // processes from interleaving partial lines.
            file.write_all(line.as_bytes())
        };
        append().map_err(|e| QueueError::AppendFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Read every pending operation back, for the drainer's replay path.
    /// Malformed lines are skipped with a warning — a torn write must not
    /// poison the rest of the log.
    pub fn pending(&self) -> TacitResult<Vec<QueuedGraphOperation>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(QueueError::ReadFailed {
                    path: self.path.display().to_string(),
                    message: e.to_string(),
                }
                .into())
            }
        };

        let mut ops = Vec::new();
        for (i, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(op) => ops.push(op),
                Err(e) => {
                    tracing::warn!(line = i + 1, error = %e, "skipping malformed queue line");
                }
            }
        }
        Ok(ops)
    }
}
