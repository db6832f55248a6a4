//! Insert-only property graph store.

use std::collections::HashMap;

use common_config::EdgePolicy;
use common_error::{SkeinError, SkeinResult};
use log::trace;

use super::{Edge, EdgeId, Vertex, VertexId};

/// An in-memory directed property graph.
///
/// Vertices and edges are keyed by identifier and kept in insertion order.
/// Inserting an element whose identifier is already present is a silent
/// no-op: the stored element is left untouched.
///
/// Alongside the edge list the store keeps, per source vertex, the
/// positions of its outgoing edges in insertion order, so traversals can
/// expand a vertex without scanning every edge.
///
/// ## Example
///
/// ```rust
/// use skein_core::{Edge, PropertyGraph, Vertex};
///
/// let mut graph = PropertyGraph::new();
/// graph.add_vertex(Vertex::new(1).with_property("name", "Alice"));
/// graph.add_vertex(Vertex::new(2).with_property("name", "Bob"));
/// graph.add_edge(Edge::new(1, 1, 2).with_property("relationship", "friends")).unwrap();
///
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.outgoing(1).count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyGraph {
    policy: EdgePolicy,
    vertices: Vec<Vertex>,
    vertex_slots: HashMap<VertexId, usize>,
    edges: Vec<Edge>,
    edge_slots: HashMap<EdgeId, usize>,
    outgoing: HashMap<VertexId, Vec<usize>>,
}

impl PropertyGraph {
    /// Create an empty graph that tolerates dangling edges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with the given edge policy.
    pub fn with_policy(policy: EdgePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Edge policy applied on insertion.
    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Insert a vertex unless its identifier is already taken.
    ///
    /// Returns `true` if the vertex was inserted.
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.vertex_slots.contains_key(&vertex.id()) {
            trace!("vertex {} already present, keeping existing entry", vertex.id());
            return false;
        }
        self.vertex_slots.insert(vertex.id(), self.vertices.len());
        self.vertices.push(vertex);
        true
    }

    /// Insert an edge unless its identifier is already taken.
    ///
    /// Returns `Ok(true)` if the edge was inserted and `Ok(false)` if the
    /// identifier was already present. Under `EdgePolicy::Validate` an edge
    /// whose source or target vertex is missing is rejected with
    /// `SkeinError::DanglingEdge`.
    pub fn add_edge(&mut self, edge: Edge) -> SkeinResult<bool> {
        if self.edge_slots.contains_key(&edge.id()) {
            trace!("edge {} already present, keeping existing entry", edge.id());
            return Ok(false);
        }

        if self.policy == EdgePolicy::Validate {
            for vertex in [edge.source(), edge.target()] {
                if !self.contains_vertex(vertex) {
                    return Err(SkeinError::DanglingEdge {
                        edge: edge.id(),
                        vertex,
                    });
                }
            }
        }

        let slot = self.edges.len();
        self.edge_slots.insert(edge.id(), slot);
        self.outgoing.entry(edge.source()).or_default().push(slot);
        self.edges.push(edge);
        Ok(true)
    }

    /// Check whether a vertex is present.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex_slots.contains_key(&id)
    }

    /// Get a vertex by ID.
    pub fn get_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertex_slots.get(&id).map(|&slot| &self.vertices[slot])
    }

    /// Get a vertex mutably, e.g. to set properties after insertion.
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        let slot = *self.vertex_slots.get(&id)?;
        self.vertices.get_mut(slot)
    }

    /// Get an edge by ID.
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edge_slots.get(&id).map(|&slot| &self.edges[slot])
    }

    /// Get an edge mutably.
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        let slot = *self.edge_slots.get(&id)?;
        self.edges.get_mut(slot)
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Positions in [`edges`](Self::edges) of the edges leaving `id`,
    /// in insertion order.
    pub fn outgoing_positions(&self, id: VertexId) -> &[usize] {
        self.outgoing.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Edges leaving `id`, in insertion order.
    pub fn outgoing(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.outgoing_positions(id)
            .iter()
            .map(move |&slot| &self.edges[slot])
    }

    /// Edges with an endpoint missing from the vertex map.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges
            .iter()
            .filter(move |e| !self.contains_vertex(e.source()) || !self.contains_vertex(e.target()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::HasProperties;
    use crate::types::Value;

    #[test]
    fn test_duplicate_vertex_is_ignored() {
        let mut graph = PropertyGraph::new();
        assert!(graph.add_vertex(Vertex::new(1).with_property("name", "Alice")));
        assert!(!graph.add_vertex(Vertex::new(1).with_property("name", "Mallory")));

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(
            graph.get_vertex(1).unwrap().get_property("name"),
            Some(&Value::from("Alice"))
        );
    }

    #[test]
    fn test_duplicate_edge_is_ignored() {
        let mut graph = PropertyGraph::new();
        graph.add_vertex(Vertex::new(1));
        graph.add_vertex(Vertex::new(2));

        assert!(graph.add_edge(Edge::new(10, 1, 2)).unwrap());
        assert!(!graph.add_edge(Edge::new(10, 2, 1)).unwrap());

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get_edge(10).unwrap().endpoints(), (1, 2));
        assert_eq!(graph.outgoing(2).count(), 0);
    }

    #[test]
    fn test_properties_set_after_insertion() {
        let mut graph = PropertyGraph::new();
        graph.add_vertex(Vertex::new(1));
        graph.vertex_mut(1).unwrap().set_property("name", "Alice");

        assert_eq!(
            graph.get_vertex(1).unwrap().get_property("name"),
            Some(&Value::from("Alice"))
        );
        assert!(graph.vertex_mut(99).is_none());
    }

    #[test]
    fn test_tolerate_policy_accepts_dangling_edge() {
        let mut graph = PropertyGraph::new();
        graph.add_vertex(Vertex::new(1));

        assert!(graph.add_edge(Edge::new(1, 1, 42)).unwrap());
        assert_eq!(graph.dangling_edges().count(), 1);
    }

    #[test]
    fn test_validate_policy_rejects_dangling_edge() {
        let mut graph = PropertyGraph::with_policy(EdgePolicy::Validate);
        graph.add_vertex(Vertex::new(1));

        let err = graph.add_edge(Edge::new(7, 1, 42)).unwrap_err();
        assert!(matches!(err, SkeinError::DanglingEdge { edge: 7, vertex: 42 }));
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.outgoing_positions(1).is_empty());

        let err = graph.add_edge(Edge::new(8, 42, 1)).unwrap_err();
        assert!(matches!(err, SkeinError::DanglingEdge { edge: 8, vertex: 42 }));
    }

    #[test]
    fn test_validate_policy_duplicate_id_is_still_noop() {
        let mut graph = PropertyGraph::with_policy(EdgePolicy::Validate);
        graph.add_vertex(Vertex::new(1));
        graph.add_vertex(Vertex::new(2));
        graph.add_edge(Edge::new(1, 1, 2)).unwrap();

        // Same id, dangling endpoints: the collision wins, no error.
        assert!(!graph.add_edge(Edge::new(1, 5, 6)).unwrap());
    }

    #[test]
    fn test_outgoing_preserves_insertion_order() {
        let mut graph = PropertyGraph::new();
        for id in 1..=4 {
            graph.add_vertex(Vertex::new(id));
        }
        graph.add_edge(Edge::new(30, 1, 4)).unwrap();
        graph.add_edge(Edge::new(10, 2, 3)).unwrap();
        graph.add_edge(Edge::new(20, 1, 2)).unwrap();
        graph.add_edge(Edge::new(5, 1, 3)).unwrap();

        let targets: Vec<_> = graph.outgoing(1).map(Edge::target).collect();
        assert_eq!(targets, vec![4, 2, 3]);
        assert_eq!(graph.outgoing_positions(1), &[0, 2, 3]);

        let ids: Vec<_> = graph.edges().iter().map(Edge::id).collect();
        assert_eq!(ids, vec![30, 10, 20, 5]);
    }
}
