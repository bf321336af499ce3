//! # tacit-graph
//!
//! Graph operation builder: turns one `DecisionRecord` into the ordered
//! entity-creation and relation-creation mutations queued for the external
//! graph memory service. Building is pure and side-effect free; durable
//! queuing lives in `tacit-queue`.

pub mod builder;
pub mod observations;

pub use builder::build_operations;
