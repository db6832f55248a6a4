//! Type identifiers for graph elements.

/// Vertex identifier, unique within one `PropertyGraph`.
pub type VertexId = i64;

/// Edge identifier, unique within one `PropertyGraph`.
pub type EdgeId = i64;

/// Concept node identifier, assigned by the external concept store.
pub type ConceptId = i64;

/// Hyperedge identifier, assigned by the external concept store.
pub type HyperedgeId = i64;

/// Label for hyperedges.
pub type Label = String;
