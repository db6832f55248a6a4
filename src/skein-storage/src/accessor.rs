//! Accessor trait and handle views.

use common_error::SkeinResult;
use skein_core::{ConceptId, ConceptRecord, HyperedgeId, HyperedgeRecord, Value, PREF_LABEL};

/// Read-only view of a concept node.
pub trait ConceptView {
    /// Concept identifier.
    fn id(&self) -> ConceptId;

    /// Hyperedges the concept participates in.
    fn hyperedges(&self) -> &[HyperedgeId];

    /// Get a property value by name.
    fn property(&self, name: &str) -> Option<&Value>;

    /// Preferred label, if set and a string.
    fn pref_label(&self) -> Option<&str> {
        self.property(PREF_LABEL).and_then(Value::as_str)
    }
}

/// Read-only view of a hyperedge.
pub trait HyperedgeView {
    /// Hyperedge identifier.
    fn id(&self) -> HyperedgeId;

    /// Relation label.
    fn label(&self) -> &str;

    /// Member concepts.
    fn related_concepts(&self) -> &[ConceptId];
}

/// Source of concept and hyperedge handles.
///
/// Implementations return `Ok(None)` when the identifier does not exist and
/// `Err(_)` when the store itself failed; callers must not treat the two
/// alike. A returned handle stays valid until dropped, and dropping it
/// releases whatever the accessor holds for it.
pub trait ConceptAccessor {
    /// Scoped handle to a concept.
    type Concept<'a>: ConceptView
    where
        Self: 'a;

    /// Scoped handle to a hyperedge.
    type Hyperedge<'a>: HyperedgeView
    where
        Self: 'a;

    /// Acquire a handle to a concept.
    fn fetch_concept(&self, id: ConceptId) -> SkeinResult<Option<Self::Concept<'_>>>;

    /// Acquire a handle to a hyperedge.
    fn fetch_hyperedge(&self, id: HyperedgeId) -> SkeinResult<Option<Self::Hyperedge<'_>>>;
}

impl ConceptView for ConceptRecord {
    fn id(&self) -> ConceptId {
        self.id
    }

    fn hyperedges(&self) -> &[HyperedgeId] {
        &self.hyperedges
    }

    fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

impl HyperedgeView for HyperedgeRecord {
    fn id(&self) -> HyperedgeId {
        self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn related_concepts(&self) -> &[ConceptId] {
        &self.related
    }
}
