//! Sample data for playground examples.
//!
//! Two small datasets: a social property graph for directed traversal and
//! a SKOS-style thesaurus for goal search.

use common_config::{EdgePolicy, StorageConfig};
use common_error::SkeinResult;
use skein_core::{ConceptRecord, Edge, HyperedgeRecord, PropertyGraph, Vertex};
use skein_storage::MemoryAccessor;

/// Build a [`PropertyMap`](skein_core::PropertyMap) from `key => value`
/// pairs.
///
/// ```rust
/// use skein_playground::properties;
///
/// let props = properties!["name" => "Alice", "age" => 30i64];
/// assert_eq!(props.len(), 2);
/// ```
#[macro_export]
macro_rules! properties {
    ($($key:literal => $value:expr),* $(,)?) => {{
        let mut map = ::skein_core::PropertyMap::new();
        $(
            map.insert($key.to_string(), ::skein_core::Value::from($value));
        )*
        map
    }};
}

/// Create the sample social graph with the default edge policy.
///
/// See [`create_social_graph_with`].
pub fn create_social_graph() -> SkeinResult<PropertyGraph> {
    create_social_graph_with(EdgePolicy::default())
}

/// Create the sample social graph.
///
/// Six people with `name`, `age` and `city` properties. Edges carry a
/// `relationship` property:
///
/// ```text
/// 1 Alice   -friends->    2 Bob
/// 1 Alice   -colleagues-> 3 Charlie
/// 2 Bob     -friends->    4 Diana
/// 3 Charlie -neighbors->  4 Diana
/// 4 Diana   -family->     1 Alice
/// 5 Eve     -friends->    6 Frank
/// ```
pub fn create_social_graph_with(policy: EdgePolicy) -> SkeinResult<PropertyGraph> {
    let mut graph = PropertyGraph::with_policy(policy);

    let people = [
        (1, "Alice", 30i64, "San Francisco"),
        (2, "Bob", 25, "New York"),
        (3, "Charlie", 35, "San Francisco"),
        (4, "Diana", 28, "Seattle"),
        (5, "Eve", 32, "New York"),
        (6, "Frank", 41, "Austin"),
    ];
    for (id, name, age, city) in people {
        graph.add_vertex(Vertex::new(id).with_properties(properties![
            "name" => name,
            "age" => age,
            "city" => city,
        ]));
    }

    let relationships = [
        (1, 1, 2, "friends"),
        (2, 1, 3, "colleagues"),
        (3, 2, 4, "friends"),
        (4, 3, 4, "neighbors"),
        (5, 4, 1, "family"),
        (6, 5, 6, "friends"),
    ];
    for (id, source, target, relationship) in relationships {
        let edge = Edge::new(id, source, target).with_property("relationship", relationship);
        graph.add_edge(edge)?;
    }

    Ok(graph)
}

/// Create the sample thesaurus.
///
/// Concepts carry `prefLabel` and `notation`; hyperedges are labelled
/// `narrower` or `related`:
///
/// ```text
/// 100 narrower  Science, Natural sciences
/// 101 narrower  Natural sciences, Physics, Chemistry, Biology
/// 102 narrower  Physics, Quantum mechanics
/// 103 related   Physics, Chemistry, Physical chemistry
/// 104 related   Chemistry, Biology, Biochemistry
/// 105 narrower  Art, Sculpture
/// ```
pub fn create_thesaurus(config: &StorageConfig) -> SkeinResult<MemoryAccessor> {
    let store = MemoryAccessor::with_config(config)?;

    let concepts = [
        (1, "Science", "500"),
        (2, "Natural sciences", "500.2"),
        (3, "Physics", "530"),
        (4, "Chemistry", "540"),
        (5, "Quantum mechanics", "530.12"),
        (6, "Physical chemistry", "541"),
        (7, "Biology", "570"),
        (8, "Biochemistry", "572"),
        (9, "Art", "700"),
        (10, "Sculpture", "730"),
    ];
    for (id, label, notation) in concepts {
        store.insert_concept(
            ConceptRecord::new(id)
                .with_pref_label(label)
                .with_property("notation", notation),
        )?;
    }

    let hyperedges: [(i64, &str, &[i64]); 6] = [
        (100, "narrower", &[1, 2]),
        (101, "narrower", &[2, 3, 4, 7]),
        (102, "narrower", &[3, 5]),
        (103, "related", &[3, 4, 6]),
        (104, "related", &[4, 7, 8]),
        (105, "narrower", &[9, 10]),
    ];
    for (id, label, members) in hyperedges {
        let hyperedge = HyperedgeRecord::new(id, label).with_concepts(members.iter().copied());
        store.insert_hyperedge(hyperedge)?;
    }

    Ok(store)
}
