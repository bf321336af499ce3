//! # tacit-vocab
//!
//! Static technology vocabulary: canonical entity names grouped by domain,
//! an alias table collapsing variant spellings, and word-boundary exact
//! extraction. Tables are immutable statics, safe to share across
//! concurrent detection calls without synchronization.

pub mod extract;
pub mod table;

pub use extract::{canonical, domain_of, entity_type_of, extract_entities, is_known};
pub use table::Domain;
