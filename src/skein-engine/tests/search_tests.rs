//! Integration tests for goal search over a concept hypergraph.
//!
//! ## Test Categories
//!
//! 1. **Paths**: immediate goals, ancestor paths, absent concepts
//! 2. **Failures**: accessor errors and exhausted handle budgets
//! 3. **Properties**: shortest paths and released handles (proptest)

use std::collections::{HashMap, HashSet, VecDeque};

use common_config::StorageConfig;
use common_error::{SkeinError, SkeinResult};
use proptest::prelude::*;
use skein_core::{ConceptId, ConceptRecord, HyperedgeId, HyperedgeRecord, PREF_LABEL};
use skein_engine::{pref_label_is, GoalSearch, SearchOutcome};
use skein_storage::{ConceptAccessor, ConceptView, MemoryAccessor, MemoryConcept, MemoryHyperedge};

// ============================================================================
// Test Helpers
// ============================================================================

/// `A -(10)- B -(11)- C -(12)- D`, plus `E` sharing hyperedge 11 with B and C.
fn ladder() -> MemoryAccessor {
    ladder_with(&StorageConfig::default())
}

fn ladder_with(config: &StorageConfig) -> MemoryAccessor {
    let store = MemoryAccessor::with_config(config).unwrap();
    for (id, label) in [(1, "A"), (2, "B"), (3, "C"), (4, "D"), (5, "E")] {
        store
            .insert_concept(ConceptRecord::new(id).with_pref_label(label))
            .unwrap();
    }
    store
        .insert_hyperedge(HyperedgeRecord::new(10, "narrower").with_concepts([1, 2]))
        .unwrap();
    store
        .insert_hyperedge(HyperedgeRecord::new(11, "related").with_concepts([5, 3, 2]))
        .unwrap();
    store
        .insert_hyperedge(HyperedgeRecord::new(12, "narrower").with_concepts([3, 4]))
        .unwrap();
    store
}

fn id_is(goal: ConceptId) -> impl Fn(&dyn ConceptView) -> bool {
    move |concept: &dyn ConceptView| concept.id() == goal
}

/// Delegates to a `MemoryAccessor` but fails when asked for one concept.
struct FailingAccessor {
    inner: MemoryAccessor,
    broken: ConceptId,
}

impl ConceptAccessor for FailingAccessor {
    type Concept<'a> = MemoryConcept<'a>;
    type Hyperedge<'a> = MemoryHyperedge<'a>;

    fn fetch_concept(&self, id: ConceptId) -> SkeinResult<Option<MemoryConcept<'_>>> {
        if id == self.broken {
            return Err(SkeinError::storage(format!("read of concept {id} timed out")));
        }
        self.inner.fetch_concept(id)
    }

    fn fetch_hyperedge(&self, id: HyperedgeId) -> SkeinResult<Option<MemoryHyperedge<'_>>> {
        self.inner.fetch_hyperedge(id)
    }
}

// ============================================================================
// Paths
// ============================================================================

#[test]
fn test_start_satisfies_goal() {
    let store = ladder();
    let report = GoalSearch::new(&store)
        .search_with_stats(2, pref_label_is("B"))
        .unwrap();

    assert_eq!(report.outcome, SearchOutcome::Found(vec![2]));
    assert_eq!(report.stats.hyperedges_fetched, 0);
    assert_eq!(store.lease_stats().acquired, 1);
    assert!(store.lease_stats().is_balanced());
}

#[test]
fn test_path_is_ancestor_chain() {
    let store = ladder();
    let outcome = GoalSearch::new(&store).search(1, pref_label_is("D")).unwrap();
    assert_eq!(outcome.path(), Some(&[1, 2, 3, 4][..]));
    assert!(store.lease_stats().is_balanced());
}

#[test]
fn test_search_runs_in_both_directions() {
    let store = ladder();
    let outcome = GoalSearch::new(&store).search(4, pref_label_is("A")).unwrap();
    assert_eq!(outcome.into_path(), Some(vec![4, 3, 2, 1]));
}

#[test]
fn test_goal_predicate_reads_properties() {
    let store = ladder();
    let mut tested = Vec::new();
    let outcome = GoalSearch::new(&store)
        .search(1, |concept: &dyn ConceptView| {
            tested.push(concept.id());
            concept.property(PREF_LABEL).and_then(|v| v.as_str()) == Some("C")
        })
        .unwrap();

    assert_eq!(outcome, SearchOutcome::Found(vec![1, 2, 3]));
    assert_eq!(tested, vec![1, 2, 5, 3]);
}

#[test]
fn test_unreachable_goal_in_cycle() {
    let store = MemoryAccessor::new();
    for id in 1..=3 {
        store.insert_concept(ConceptRecord::new(id)).unwrap();
    }
    store
        .insert_hyperedge(HyperedgeRecord::new(1, "related").with_concepts([1, 2]))
        .unwrap();
    store
        .insert_hyperedge(HyperedgeRecord::new(2, "related").with_concepts([2, 3]))
        .unwrap();
    store
        .insert_hyperedge(HyperedgeRecord::new(3, "related").with_concepts([3, 1]))
        .unwrap();

    let report = GoalSearch::new(&store)
        .search_with_stats(1, pref_label_is("missing"))
        .unwrap();
    assert_eq!(report.outcome, SearchOutcome::NotFound);
    assert_eq!(report.stats.concepts_visited, 3);
    assert!(store.lease_stats().is_balanced());
}

#[test]
fn test_absent_concepts_are_skipped() {
    let store = MemoryAccessor::new();
    store.insert_concept(ConceptRecord::new(1)).unwrap();
    store
        .insert_concept(ConceptRecord::new(2).with_pref_label("goal"))
        .unwrap();
    store
        .insert_hyperedge(HyperedgeRecord::new(7, "related").with_concepts([1, 404, 2]))
        .unwrap();

    let report = GoalSearch::new(&store)
        .search_with_stats(1, pref_label_is("goal"))
        .unwrap();
    assert_eq!(report.outcome.path(), Some(&[1, 2][..]));
    assert_eq!(report.stats.concepts_missing, 1);
}

#[test]
fn test_absent_start_is_not_found() {
    let store = ladder();
    let outcome = GoalSearch::new(&store).search(99, |_: &dyn ConceptView| true).unwrap();
    assert_eq!(outcome, SearchOutcome::NotFound);
    assert_eq!(store.lease_stats().acquired, 0);
}

#[test]
fn test_claimed_link_does_not_shortcut() {
    let json = r#"{
        "concepts": [{ "id": 1, "hyperedges": [5] }, { "id": 2 }, { "id": 3 }],
        "hyperedges": [{ "id": 5, "label": "related", "related": [2, 3] }]
    }"#;
    let store = MemoryAccessor::from_json_str(json, &StorageConfig::default()).unwrap();
    let search = GoalSearch::new(&store);

    assert_eq!(search.search(1, id_is(3)).unwrap(), SearchOutcome::NotFound);
    assert_eq!(search.search(3, id_is(1)).unwrap(), SearchOutcome::NotFound);
    assert_eq!(search.search(2, id_is(3)).unwrap().into_path(), Some(vec![2, 3]));
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_accessor_error_is_propagated() {
    let accessor = FailingAccessor {
        inner: ladder(),
        broken: 3,
    };
    let err = GoalSearch::new(&accessor)
        .search(1, pref_label_is("D"))
        .unwrap_err();

    assert!(matches!(err, SkeinError::StorageError(_)));
    assert!(err.is_storage());
    assert!(accessor.inner.lease_stats().is_balanced());
}

#[test]
fn test_exhausted_budget_releases_handles() {
    let store = ladder_with(&StorageConfig {
        max_open_handles: Some(1),
    });
    let err = GoalSearch::new(&store).search(1, pref_label_is("D")).unwrap_err();
    assert!(matches!(err, SkeinError::ResourceExhausted(_)));

    let stats = store.lease_stats();
    assert_eq!(stats.acquired, 1);
    assert!(stats.is_balanced());
}

#[test]
fn test_two_handles_suffice() {
    let store = ladder_with(&StorageConfig {
        max_open_handles: Some(2),
    });
    let outcome = GoalSearch::new(&store).search(1, pref_label_is("D")).unwrap();
    assert!(outcome.is_found());
    assert_eq!(store.lease_stats().peak_open, 2);
}

// ============================================================================
// Properties
// ============================================================================

fn arbitrary_thesaurus() -> impl Strategy<Value = (i64, Vec<Vec<ConceptId>>)> {
    (2i64..10).prop_flat_map(|n| {
        let members = prop::collection::vec(1..=n + 2, 2..5);
        (Just(n), prop::collection::vec(members, 0..12))
    })
}

fn build(n: i64, hyperedges: &[Vec<ConceptId>]) -> (MemoryAccessor, Vec<HashSet<ConceptId>>) {
    let store = MemoryAccessor::new();
    for id in 1..=n {
        store.insert_concept(ConceptRecord::new(id)).unwrap();
    }

    let mut kept = Vec::new();
    for (i, members) in hyperedges.iter().enumerate() {
        let mut unique = Vec::new();
        for &m in members {
            if !unique.contains(&m) {
                unique.push(m);
            }
        }
        if unique.len() < 2 {
            continue;
        }
        kept.push(unique.iter().copied().collect());
        store
            .insert_hyperedge(HyperedgeRecord::new(i as i64 + 1, "related").with_concepts(unique))
            .unwrap();
    }
    (store, kept)
}

/// Hop distances from `start` over present concepts, computed without the
/// accessor.
fn distances(
    n: i64,
    hyperedges: &[HashSet<ConceptId>],
    start: ConceptId,
) -> HashMap<ConceptId, usize> {
    let present = |id: ConceptId| (1..=n).contains(&id);
    let mut dist = HashMap::from([(start, 0)]);
    let mut pending = VecDeque::from([start]);
    while let Some(id) = pending.pop_front() {
        let d = dist[&id];
        for edge in hyperedges.iter().filter(|e| e.contains(&id)) {
            for &next in edge {
                if present(next) && !dist.contains_key(&next) {
                    dist.insert(next, d + 1);
                    pending.push_back(next);
                }
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn search_finds_shortest_path(
        (n, hyperedges) in arbitrary_thesaurus(),
        start_seed in 0i64..100,
        goal_seed in 0i64..100,
    ) {
        let start = start_seed % n + 1;
        let goal = goal_seed % n + 1;
        let (store, kept) = build(n, &hyperedges);
        let expected = distances(n, &kept, start);

        let outcome = GoalSearch::new(&store)
            .search(start, |c: &dyn ConceptView| c.id() == goal)
            .unwrap();

        match expected.get(&goal) {
            Some(&hops) => {
                let path = outcome.into_path().unwrap();
                prop_assert_eq!(path.len(), hops + 1);
                prop_assert_eq!(path[0], start);
                prop_assert_eq!(*path.last().unwrap(), goal);
                for pair in path.windows(2) {
                    prop_assert!(kept.iter().any(|e| e.contains(&pair[0]) && e.contains(&pair[1])));
                }
            }
            None => prop_assert_eq!(outcome, SearchOutcome::NotFound),
        }
        prop_assert!(store.lease_stats().is_balanced());
    }
}
