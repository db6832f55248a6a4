//! Directed property graph.
//!
//! This module provides the property graph primitives:
//! - `Vertex` for addressable entities
//! - `Edge` for directed binary relations
//! - `PropertyGraph` for the insert-only store that owns both

mod edge;
mod identifiers;
mod properties;
mod store;
mod vertex;

pub use edge::Edge;
pub use identifiers::{ConceptId, EdgeId, HyperedgeId, Label, VertexId};
pub use properties::{HasProperties, PropertyMap};
pub use store::PropertyGraph;
pub use vertex::Vertex;
