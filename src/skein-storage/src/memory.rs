//! `MemoryAccessor` implementation.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use common_config::StorageConfig;
use common_error::{ensure, SkeinError, SkeinResult};
use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use skein_core::{ConceptId, ConceptRecord, HyperedgeId, HyperedgeRecord, Value};

use crate::accessor::{ConceptAccessor, ConceptView, HyperedgeView};
use crate::lease::{Lease, LeaseLedger, LeaseStats};

/// Serialized form of a concept store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThesaurusDocument {
    /// Concept nodes.
    pub concepts: Vec<ConceptRecord>,
    /// Hyperedges between concepts.
    pub hyperedges: Vec<HyperedgeRecord>,
}

/// In-memory concept store.
///
/// Records are shared with handles through `Arc`, so a handle stays valid
/// even if the store is modified while it is open. Every handed-out handle
/// holds a [`Lease`] on the store's ledger; [`lease_stats`](Self::lease_stats)
/// reports how many are outstanding.
///
/// # Example
///
/// ```rust
/// use skein_core::{ConceptRecord, HyperedgeRecord};
/// use skein_storage::{ConceptAccessor, ConceptView, MemoryAccessor};
///
/// let store = MemoryAccessor::new();
/// store.insert_concept(ConceptRecord::new(1).with_pref_label("Animals")).unwrap();
/// store.insert_concept(ConceptRecord::new(2).with_pref_label("Cats")).unwrap();
/// store.insert_hyperedge(HyperedgeRecord::new(10, "narrower").with_concepts([1, 2])).unwrap();
///
/// let animals = store.fetch_concept(1).unwrap().unwrap();
/// assert_eq!(animals.hyperedges(), &[10]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryAccessor {
    concepts: RwLock<HashMap<ConceptId, Arc<ConceptRecord>>>,
    hyperedges: RwLock<HashMap<HyperedgeId, Arc<HyperedgeRecord>>>,
    leases: LeaseLedger,
}

impl MemoryAccessor {
    /// Create an empty store without a handle budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store configured from `config`.
    ///
    /// Fails with `ConfigError` if the handle budget is zero.
    pub fn with_config(config: &StorageConfig) -> SkeinResult<Self> {
        config.validate()?;
        Ok(Self {
            concepts: RwLock::default(),
            hyperedges: RwLock::default(),
            leases: LeaseLedger::with_limit(config.max_open_handles),
        })
    }

    /// Build a store from a JSON thesaurus document.
    pub fn from_json_str(json: &str, config: &StorageConfig) -> SkeinResult<Self> {
        let document: ThesaurusDocument = serde_json::from_str(json)?;
        let store = Self::with_config(config)?;
        store.load(document)?;
        Ok(store)
    }

    /// Build a store from a JSON thesaurus file.
    pub fn from_json_file(path: impl AsRef<Path>, config: &StorageConfig) -> SkeinResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw, config)
    }

    /// Insert every concept, then every hyperedge, of a document.
    pub fn load(&self, document: ThesaurusDocument) -> SkeinResult<()> {
        let concepts = document.concepts.len();
        let hyperedges = document.hyperedges.len();
        for concept in document.concepts {
            self.insert_concept(concept)?;
        }
        for hyperedge in document.hyperedges {
            self.insert_hyperedge(hyperedge)?;
        }
        debug!("loaded {concepts} concepts and {hyperedges} hyperedges");
        Ok(())
    }

    /// Export the store's contents, ordered by identifier.
    pub fn to_document(&self) -> ThesaurusDocument {
        let mut concepts: Vec<_> = self
            .concepts
            .read()
            .values()
            .map(|c| ConceptRecord::clone(c))
            .collect();
        concepts.sort_by_key(|c| c.id);
        let mut hyperedges: Vec<_> = self
            .hyperedges
            .read()
            .values()
            .map(|h| HyperedgeRecord::clone(h))
            .collect();
        hyperedges.sort_by_key(|h| h.id);
        ThesaurusDocument {
            concepts,
            hyperedges,
        }
    }

    /// Insert a concept unless its identifier is already taken.
    ///
    /// The concept's hyperedge list is rebuilt from the hyperedges already
    /// stored that list it as a member; ids listed on the record itself are
    /// ignored. Hyperedges inserted later link the concept when they
    /// involve it, so membership stays symmetric.
    pub fn insert_concept(&self, mut concept: ConceptRecord) -> SkeinResult<bool> {
        let mut concepts = self.concepts.write();
        if concepts.contains_key(&concept.id) {
            return Ok(false);
        }

        let listed = std::mem::take(&mut concept.hyperedges);
        let hyperedges = self.hyperedges.read();
        let mut members_of: Vec<_> = hyperedges
            .values()
            .filter(|h| h.involves(concept.id))
            .map(|h| h.id)
            .collect();
        members_of.sort_unstable();
        for id in members_of {
            concept.link(id);
        }

        let unmatched = listed
            .iter()
            .filter(|id| !concept.hyperedges.contains(id))
            .count();
        if unmatched > 0 {
            debug!(
                "concept {}: ignored {unmatched} listed hyperedge links without membership",
                concept.id
            );
        }

        concepts.insert(concept.id, Arc::new(concept));
        Ok(true)
    }

    /// Insert a hyperedge unless its identifier is already taken.
    ///
    /// The hyperedge must relate at least two distinct concepts. It is
    /// linked into the hyperedge list of every member concept already
    /// stored; members that do not exist yet are linked when inserted.
    pub fn insert_hyperedge(&self, hyperedge: HyperedgeRecord) -> SkeinResult<bool> {
        ensure!(
            hyperedge.arity() >= 2,
            InvalidHyperedge: "hyperedge {} has arity {}, expected at least 2",
            hyperedge.id,
            hyperedge.arity()
        );
        if let Some(member) = hyperedge.duplicate_member() {
            return Err(SkeinError::invalid_hyperedge(format!(
                "hyperedge {} lists concept {member} more than once",
                hyperedge.id
            )));
        }

        let mut concepts = self.concepts.write();
        let mut hyperedges = self.hyperedges.write();
        if hyperedges.contains_key(&hyperedge.id) {
            return Ok(false);
        }

        for member in &hyperedge.related {
            if let Some(concept) = concepts.get_mut(member) {
                Arc::make_mut(concept).link(hyperedge.id);
            }
        }
        hyperedges.insert(hyperedge.id, Arc::new(hyperedge));
        Ok(true)
    }

    /// Number of stored concepts.
    pub fn concept_count(&self) -> usize {
        self.concepts.read().len()
    }

    /// Number of stored hyperedges.
    pub fn hyperedge_count(&self) -> usize {
        self.hyperedges.read().len()
    }

    /// Find concepts by preferred label.
    pub fn find_by_label(&self, label: &str) -> Vec<ConceptId> {
        let mut ids: Vec<_> = self
            .concepts
            .read()
            .values()
            .filter(|c| c.pref_label() == Some(label))
            .map(|c| c.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Handle lease counters.
    pub fn lease_stats(&self) -> LeaseStats {
        self.leases.stats()
    }
}

impl ConceptAccessor for MemoryAccessor {
    type Concept<'a> = MemoryConcept<'a>;
    type Hyperedge<'a> = MemoryHyperedge<'a>;

    fn fetch_concept(&self, id: ConceptId) -> SkeinResult<Option<MemoryConcept<'_>>> {
        let Some(record) = self.concepts.read().get(&id).cloned() else {
            return Ok(None);
        };
        let lease = self.leases.acquire(format_args!("concept {id}"))?;
        Ok(Some(MemoryConcept {
            record,
            _lease: lease,
        }))
    }

    fn fetch_hyperedge(&self, id: HyperedgeId) -> SkeinResult<Option<MemoryHyperedge<'_>>> {
        let Some(record) = self.hyperedges.read().get(&id).cloned() else {
            return Ok(None);
        };
        let lease = self.leases.acquire(format_args!("hyperedge {id}"))?;
        Ok(Some(MemoryHyperedge {
            record,
            _lease: lease,
        }))
    }
}

/// Scoped handle to a concept in a [`MemoryAccessor`].
#[derive(Debug)]
pub struct MemoryConcept<'a> {
    record: Arc<ConceptRecord>,
    _lease: Lease<'a>,
}

impl ConceptView for MemoryConcept<'_> {
    fn id(&self) -> ConceptId {
        self.record.id
    }

    fn hyperedges(&self) -> &[HyperedgeId] {
        &self.record.hyperedges
    }

    fn property(&self, name: &str) -> Option<&Value> {
        self.record.properties.get(name)
    }
}

/// Scoped handle to a hyperedge in a [`MemoryAccessor`].
#[derive(Debug)]
pub struct MemoryHyperedge<'a> {
    record: Arc<HyperedgeRecord>,
    _lease: Lease<'a>,
}

impl HyperedgeView for MemoryHyperedge<'_> {
    fn id(&self) -> HyperedgeId {
        self.record.id
    }

    fn label(&self) -> &str {
        &self.record.label
    }

    fn related_concepts(&self) -> &[ConceptId] {
        &self.record.related
    }
}
