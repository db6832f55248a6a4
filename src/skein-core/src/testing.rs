//! Testing utilities and helpers for skein-core.
//!
//! This module provides common graph shapes used by the unit and
//! integration tests across the workspace.

use std::collections::HashMap;

use crate::graph::{Edge, EdgeId, PropertyGraph, Vertex, VertexId};
use crate::types::Value;

const NO_PROPERTIES: [(&str, &str); 0] = [];

/// Test fixture builder for creating common graph scenarios.
pub struct GraphFixture {
    graph: PropertyGraph,
    names: HashMap<String, VertexId>,
    next_edge: EdgeId,
}

impl GraphFixture {
    /// Create a new empty fixture.
    pub fn new() -> Self {
        Self {
            graph: PropertyGraph::new(),
            names: HashMap::new(),
            next_edge: 1,
        }
    }

    /// `1 -> 2 -> ... -> len`.
    pub fn chain(len: i64) -> Self {
        let mut fixture = Self::new();
        for id in 1..=len {
            fixture.add_vertex(&format!("v{id}"), id, NO_PROPERTIES);
        }
        for id in 1..len {
            fixture.connect(id, id + 1);
        }
        fixture
    }

    /// `1 -> 2 -> ... -> len -> 1`.
    pub fn cycle(len: i64) -> Self {
        let mut fixture = Self::chain(len);
        if len > 0 {
            fixture.connect(len, 1);
        }
        fixture
    }

    /// `1 -> {2, 3}`, `2 -> 4`, `3 -> 4`, plus an isolated vertex `5`.
    pub fn diamond() -> Self {
        let mut fixture = Self::new();
        for id in 1..=5 {
            fixture.add_vertex(&format!("v{id}"), id, NO_PROPERTIES);
        }
        fixture.connect(1, 2);
        fixture.connect(1, 3);
        fixture.connect(2, 4);
        fixture.connect(3, 4);
        fixture
    }

    /// A small social network with `knows` edges:
    /// alice -> bob -> charlie -> alice, alice -> diana, and an isolated erin.
    pub fn social_network() -> Self {
        let mut fixture = Self::new();
        let alice = fixture.add_vertex("alice", 1, [("name", "Alice")]);
        let bob = fixture.add_vertex("bob", 2, [("name", "Bob")]);
        let charlie = fixture.add_vertex("charlie", 3, [("name", "Charlie")]);
        let diana = fixture.add_vertex("diana", 4, [("name", "Diana")]);
        fixture.add_vertex("erin", 5, [("name", "Erin")]);

        fixture.connect(alice, bob);
        fixture.connect(bob, charlie);
        fixture.connect(charlie, alice);
        fixture.connect(alice, diana);
        fixture
    }

    /// Add a vertex and track it by name.
    pub fn add_vertex<'a>(
        &mut self,
        name: &str,
        id: VertexId,
        properties: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> VertexId {
        let mut vertex = Vertex::new(id);
        for (key, value) in properties {
            vertex.properties.insert(key.to_string(), Value::from(value));
        }
        self.graph.add_vertex(vertex);
        self.names.insert(name.to_string(), id);
        id
    }

    /// Add an edge with the next free edge id.
    pub fn connect(&mut self, source: VertexId, target: VertexId) -> EdgeId {
        let id = self.next_edge;
        self.next_edge += 1;
        self.graph
            .add_edge(Edge::new(id, source, target))
            .expect("fixture graphs use the tolerant edge policy");
        id
    }

    /// Look up a vertex id by fixture name.
    pub fn vertex(&self, name: &str) -> Option<VertexId> {
        self.names.get(name).copied()
    }

    /// Get the graph.
    pub const fn graph(&self) -> &PropertyGraph {
        &self.graph
    }

    /// Get the graph mutably.
    pub fn graph_mut(&mut self) -> &mut PropertyGraph {
        &mut self.graph
    }

    /// Consume the fixture, returning the graph.
    pub fn into_graph(self) -> PropertyGraph {
        self.graph
    }
}

impl Default for GraphFixture {
    fn default() -> Self {
        Self::new()
    }
}
