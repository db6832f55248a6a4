//! Concept hypergraph records.
//!
//! Concepts and hyperedges are owned by an external concept store; these
//! records are the materialized form an accessor hands out:
//! - `ConceptRecord` for a concept node and the hyperedges it takes part in
//! - `HyperedgeRecord` for an n-ary, symmetric relation between concepts

mod concept;
mod hyperedge;

pub use concept::{ConceptRecord, PREF_LABEL};
pub use hyperedge::HyperedgeRecord;
