use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Importance level attached to record metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low,
    Normal,
    High,
    Critical,
}

impl Default for Importance {
    fn default() -> Self {
        Self::Normal
    }
}
