//! # tacit-sync
//!
//! Local↔global merge for learned pattern libraries: pulls global patterns
//! into project scope and pushes project-learned patterns upward. Pattern
//! files are a different artifact from decision records; this crate shares
//! only the local-file storage conventions with the capture pipeline.

pub mod config;

pub use config::SyncConfig;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tacit_core::constants::MAX_SYNC_FILE_BYTES;
use tacit_core::errors::{SyncError, TacitResult};

/// One learned heuristic pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnedPattern {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_project: Option<String>,
    pub learned_at: DateTime<Utc>,
}

/// What one sync pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SyncReport {
    pub pulled: usize,
    pub pushed: usize,
    pub skipped_project: bool,
    pub skipped_global: bool,
}

/// Merge the project and global pattern files both ways, deduplicating by
/// exact text. Either side whose file exceeds 1 MiB is skipped entirely,
/// neither read from nor written to.
pub fn sync(project_path: &Path, global_path: &Path, config: &SyncConfig) -> TacitResult<SyncReport> {
    let mut report = SyncReport::default();
    if !config.enabled {
        return Ok(report);
    }

    report.skipped_project = oversized(project_path);
    report.skipped_global = oversized(global_path);
    if report.skipped_project || report.skipped_global {
        tracing::warn!(
            project = report.skipped_project,
            global = report.skipped_global,
            "pattern file over size limit, sync skipped"
        );
        return Ok(report);
    }

    let project = load_patterns(project_path)?;
    let global = load_patterns(global_path)?;

    // Pull: global → project.
    let mut merged = project.clone();
    for pattern in &global {
        if !contains_text(&merged, &pattern.text) {
            merged.push(pattern.clone());
            report.pulled += 1;
        }
    }
    if report.pulled > 0 {
        save_patterns(project_path, &merged)?;
    }

    // Push: project → global.
    let mut merged = global;
    for pattern in &project {
        if !contains_text(&merged, &pattern.text) {
            merged.push(pattern.clone());
            report.pushed += 1;
        }
    }
    if report.pushed > 0 {
        save_patterns(global_path, &merged)?;
    }

    tracing::debug!(
        pulled = report.pulled,
        pushed = report.pushed,
        "pattern sync complete"
    );
    Ok(report)
}

fn oversized(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.len() > MAX_SYNC_FILE_BYTES)
        .unwrap_or(false)
}

fn contains_text(patterns: &[LearnedPattern], text: &str) -> bool {
    patterns.iter().any(|p| p.text == text)
}

/// Load a pattern file. Missing file is an empty library, not an error.
pub fn load_patterns(path: &Path) -> TacitResult<Vec<LearnedPattern>> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&raw).map_err(|e| {
        SyncError::MalformedPatternFile {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

fn save_patterns(path: &Path, patterns: &[LearnedPattern]) -> TacitResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(patterns)?;
    std::fs::write(path, raw).map_err(|e| SyncError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(())
}
