//! Goal-directed breadth-first search over a concept hypergraph.

use std::collections::{HashMap, HashSet, VecDeque};

use common_error::SkeinResult;
use log::{debug, trace};
use skein_core::ConceptId;
use skein_storage::{ConceptAccessor, ConceptView, HyperedgeView};

/// Result of a goal search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Concept ids from the start to the first goal concept, both included.
    Found(Vec<ConceptId>),
    /// No reachable concept satisfied the goal.
    NotFound,
}

impl SearchOutcome {
    /// Check whether a goal concept was reached.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path, if found.
    pub fn path(&self) -> Option<&[ConceptId]> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }

    /// Consume the outcome, returning the path if found.
    pub fn into_path(self) -> Option<Vec<ConceptId>> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Concepts fetched and tested against the goal.
    pub concepts_visited: usize,
    /// Concepts whose hyperedges were expanded.
    pub concepts_expanded: usize,
    /// Discovered ids the accessor reported as absent.
    pub concepts_missing: usize,
    /// Hyperedges fetched during expansion.
    pub hyperedges_fetched: usize,
    /// Hyperedge ids the accessor reported as absent.
    pub hyperedges_missing: usize,
}

/// Outcome of a search together with its counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// Breadth-first search from a start concept to the first concept accepted
/// by a goal predicate.
///
/// Concepts are marked discovered when first enqueued, so each id is fetched
/// at most once and cycles terminate. Every concept and hyperedge handle
/// taken from the accessor is dropped before the search returns, on success,
/// exhaustion and error alike.
///
/// The returned path follows the parent chain recorded at discovery time,
/// so consecutive ids always share a hyperedge.
#[derive(Debug)]
pub struct GoalSearch<'a, A> {
    accessor: &'a A,
}

impl<'a, A: ConceptAccessor> GoalSearch<'a, A> {
    /// Create a search over `accessor`.
    pub fn new(accessor: &'a A) -> Self {
        Self { accessor }
    }

    /// Search from `start` until `goal` accepts a concept.
    ///
    /// An absent start concept yields `NotFound`. Accessor failures are
    /// returned as errors and never reported as `NotFound`.
    pub fn search<G>(&self, start: ConceptId, goal: G) -> SkeinResult<SearchOutcome>
    where
        G: FnMut(&dyn ConceptView) -> bool,
    {
        self.search_with_stats(start, goal).map(|report| report.outcome)
    }

    /// Like [`search`](Self::search), also returning counters.
    pub fn search_with_stats<G>(&self, start: ConceptId, mut goal: G) -> SkeinResult<SearchReport>
    where
        G: FnMut(&dyn ConceptView) -> bool,
    {
        let mut stats = SearchStats::default();
        let mut discovered = HashSet::from([start]);
        let mut parents: HashMap<ConceptId, ConceptId> = HashMap::new();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            let Some(concept) = self.accessor.fetch_concept(current)? else {
                trace!("search: concept {current} is absent, skipping");
                stats.concepts_missing += 1;
                continue;
            };
            stats.concepts_visited += 1;

            let view: &dyn ConceptView = &concept;
            if goal(view) {
                drop(concept);
                let path = trace_back(&parents, current);
                debug!(
                    "search from {start}: goal {current} reached at depth {} ({stats:?})",
                    path.len() - 1
                );
                return Ok(SearchReport {
                    outcome: SearchOutcome::Found(path),
                    stats,
                });
            }

            stats.concepts_expanded += 1;
            for &edge_id in concept.hyperedges() {
                let Some(edge) = self.accessor.fetch_hyperedge(edge_id)? else {
                    trace!("search: hyperedge {edge_id} of concept {current} is absent");
                    stats.hyperedges_missing += 1;
                    continue;
                };
                stats.hyperedges_fetched += 1;

                for &related in edge.related_concepts() {
                    if discovered.insert(related) {
                        parents.insert(related, current);
                        queue.push_back(related);
                    }
                }
            }
        }

        debug!("search from {start}: goal not reachable ({stats:?})");
        Ok(SearchReport {
            outcome: SearchOutcome::NotFound,
            stats,
        })
    }
}

/// Goal predicate matching a concept's preferred label exactly.
pub fn pref_label_is(label: &str) -> impl Fn(&dyn ConceptView) -> bool + '_ {
    move |concept: &dyn ConceptView| concept.pref_label() == Some(label)
}

fn trace_back(parents: &HashMap<ConceptId, ConceptId>, goal: ConceptId) -> Vec<ConceptId> {
    let mut path = vec![goal];
    let mut cursor = goal;
    while let Some(&parent) = parents.get(&cursor) {
        path.push(parent);
        cursor = parent;
    }
    path.reverse();
    path
}
