//! Directed binary edge representation.

use serde::{Deserialize, Serialize};

use super::properties::HasProperties;
use super::{EdgeId, PropertyMap, VertexId};
use crate::types::Value;

/// A directed edge from `source` to `target`.
///
/// Endpoints are stored by identifier; whether they must exist in the
/// owning store is decided by the store's `EdgePolicy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    id: EdgeId,
    source: VertexId,
    target: VertexId,
    /// Edge properties.
    #[serde(default)]
    pub properties: PropertyMap,
}

impl Edge {
    /// Create an edge with no properties.
    pub fn new(id: EdgeId, source: VertexId, target: VertexId) -> Self {
        Self {
            id,
            source,
            target,
            properties: PropertyMap::new(),
        }
    }

    /// Unique edge identifier.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Source vertex identifier.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Target vertex identifier.
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Get the endpoints as a tuple (source, target).
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.source, self.target)
    }

    /// Check if the edge starts and ends at the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Add a single property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Replace the properties of this edge.
    #[must_use]
    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }
}

impl HasProperties for Edge {
    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }
}
