//! Synchronizer config. Malformed or unreadable config must never disable
//! sync silently — the default is enabled.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub enabled: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SyncConfig {
    /// Load from TOML. Missing or malformed files yield the default
    /// (sync enabled) — a broken config file must not stop syncing.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed sync config, using defaults");
                Self::default()
            }
        }
    }
}
