//! # tacit-record
//!
//! Turns detected intents into persistable `DecisionRecord`s: generates
//! typed ids, stamps time and identity, applies defaults, and derives
//! generalizability and sharing scope from evidence.

pub mod builder;
pub mod generalizability;

pub use builder::{build, from_intent, BuildContext};
pub use generalizability::{is_generalizable, sharing_scope};
