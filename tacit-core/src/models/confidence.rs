use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use ts_rs::TS;

/// Confidence score clamped to [0.0, 1.0].
/// Represents how sure the detector is that a span expresses the intent
/// it was classified as.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Confidence(f64);

impl Confidence {
    /// Generalizability gate. Records at or above this may be shared globally.
    pub const HIGH: f64 = 0.8;
    /// Bucket inclusion gate for decisions and preferences.
    pub const BUCKET: f64 = 0.7;
    /// Medium confidence threshold.
    pub const MEDIUM: f64 = 0.5;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this clears the generalizability gate.
    pub fn is_high(self) -> bool {
        self.0 >= Self::HIGH
    }

    /// Whether this clears the decision/preference bucket gate.
    pub fn clears_bucket(self) -> bool {
        self.0 >= Self::BUCKET
    }

    /// Rendered as a whole percentage, e.g. `85%`, for graph observations.
    pub fn as_percent(self) -> String {
        format!("{:.0}%", self.0 * 100.0)
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(Self::MEDIUM)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl Add for Confidence {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for Confidence {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}
