//! Core data model for Skein.
//!
//! This crate provides the fundamental types shared by the rest of the workspace:
//! - `Value` and `PropertyMap` for schema-less metadata
//! - `Vertex`, `Edge` and the `PropertyGraph` store
//! - `ConceptRecord` and `HyperedgeRecord` for the concept hypergraph

pub mod graph;
pub mod hypergraph;
pub mod testing;
pub mod types;

// Re-export commonly used types
pub use graph::{
    ConceptId, Edge, EdgeId, HasProperties, HyperedgeId, PropertyGraph, PropertyMap, Vertex,
    VertexId,
};
pub use hypergraph::{ConceptRecord, HyperedgeRecord, PREF_LABEL};
pub use types::Value;
