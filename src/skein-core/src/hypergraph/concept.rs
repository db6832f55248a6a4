//! Concept node representation.

use serde::{Deserialize, Serialize};

use crate::graph::{ConceptId, HasProperties, HyperedgeId, PropertyMap};
use crate::types::Value;

/// Property holding a concept's preferred label.
pub const PREF_LABEL: &str = "prefLabel";

/// A concept node as stored by a concept accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptRecord {
    /// Unique concept identifier.
    pub id: ConceptId,
    /// Hyperedges this concept participates in, in insertion order.
    #[serde(default)]
    pub hyperedges: Vec<HyperedgeId>,
    /// Concept properties.
    #[serde(default)]
    pub properties: PropertyMap,
}

impl ConceptRecord {
    /// Create a concept with no hyperedges and no properties.
    pub fn new(id: ConceptId) -> Self {
        Self {
            id,
            hyperedges: Vec::new(),
            properties: PropertyMap::new(),
        }
    }

    /// Set the preferred label.
    #[must_use]
    pub fn with_pref_label(self, label: impl Into<String>) -> Self {
        self.with_property(PREF_LABEL, label.into())
    }

    /// Add a single property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Preferred label, if set and a string.
    pub fn pref_label(&self) -> Option<&str> {
        self.properties.get(PREF_LABEL).and_then(Value::as_str)
    }

    /// Record participation in a hyperedge. Repeated links are ignored.
    pub fn link(&mut self, hyperedge: HyperedgeId) {
        if !self.hyperedges.contains(&hyperedge) {
            self.hyperedges.push(hyperedge);
        }
    }
}

impl HasProperties for ConceptRecord {
    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }
}
