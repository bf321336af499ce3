//! # tacit-detect
//!
//! Heuristic intent detection over free-form text: a declarative
//! trigger-rule table, one uniform matching engine, confidence scoring via
//! an ordered adjustment list, windowed sub-extraction of rationale,
//! constraints, tradeoffs, and alternatives, and overlap deduplication.
//!
//! Detection is best-effort: a low-confidence detection is valid output,
//! not a failure, and no code path here returns an error.

pub mod dedup;
pub mod detector;
pub mod extractors;
pub mod rules;
pub mod scoring;
pub mod summary;

pub use detector::{detect, Detector};
