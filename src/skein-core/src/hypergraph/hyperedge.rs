//! N-ary hyperedge representation.

use serde::{Deserialize, Serialize};

use crate::graph::{ConceptId, HasProperties, HyperedgeId, Label, PropertyMap};
use crate::types::Value;

/// An n-ary relation between concepts.
///
/// Membership is symmetric: there is no designated source or target, and a
/// search entering the hyperedge through any member reaches all others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperedgeRecord {
    /// Unique hyperedge identifier.
    pub id: HyperedgeId,
    /// Relation label, e.g. `broader` or `related`.
    pub label: Label,
    /// Member concepts in insertion order.
    pub related: Vec<ConceptId>,
    /// Hyperedge properties.
    #[serde(default)]
    pub properties: PropertyMap,
}

impl HyperedgeRecord {
    /// Create a hyperedge with no members.
    pub fn new(id: HyperedgeId, label: impl Into<Label>) -> Self {
        Self {
            id,
            label: label.into(),
            related: Vec::new(),
            properties: PropertyMap::new(),
        }
    }

    /// Add a member concept.
    #[must_use]
    pub fn with_concept(mut self, concept: ConceptId) -> Self {
        self.related.push(concept);
        self
    }

    /// Add several member concepts.
    #[must_use]
    pub fn with_concepts(mut self, concepts: impl IntoIterator<Item = ConceptId>) -> Self {
        self.related.extend(concepts);
        self
    }

    /// Add a single property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Number of member concepts.
    pub fn arity(&self) -> usize {
        self.related.len()
    }

    /// Check if a concept is a member.
    pub fn involves(&self, concept: ConceptId) -> bool {
        self.related.contains(&concept)
    }

    /// First member listed more than once, if any.
    pub fn duplicate_member(&self) -> Option<ConceptId> {
        self.related
            .iter()
            .enumerate()
            .find(|(i, id)| self.related[..*i].contains(id))
            .map(|(_, &id)| id)
    }
}

impl HasProperties for HyperedgeRecord {
    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }
}
