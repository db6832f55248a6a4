//! Vertex representation.

use serde::{Deserialize, Serialize};

use super::properties::HasProperties;
use super::{PropertyMap, VertexId};
use crate::types::Value;

/// A vertex in the property graph.
///
/// The identifier is fixed at construction; only the properties can change
/// once the vertex is owned by a `PropertyGraph`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,
    /// Vertex properties.
    #[serde(default)]
    pub properties: PropertyMap,
}

impl Vertex {
    /// Create a vertex with no properties.
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            properties: PropertyMap::new(),
        }
    }

    /// Unique vertex identifier.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Add a single property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Replace the properties of this vertex.
    #[must_use]
    pub fn with_properties(mut self, properties: PropertyMap) -> Self {
        self.properties = properties;
        self
    }
}

impl HasProperties for Vertex {
    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }
}
