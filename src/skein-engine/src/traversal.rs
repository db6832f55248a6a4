//! Breadth-first and depth-first reachability over a property graph.

use std::collections::{HashSet, VecDeque};

use common_config::{AdjacencyMode, TraversalConfig};
use log::{debug, trace};
use skein_core::{PropertyGraph, Vertex, VertexId};

/// Receives vertices in visitation order.
pub trait VisitSink {
    /// Called exactly once per visited vertex.
    fn visit(&mut self, vertex: &Vertex);
}

impl<F: FnMut(&Vertex)> VisitSink for F {
    fn visit(&mut self, vertex: &Vertex) {
        self(vertex);
    }
}

/// Records vertex ids in visitation order.
impl VisitSink for Vec<VertexId> {
    fn visit(&mut self, vertex: &Vertex) {
        self.push(vertex.id());
    }
}

/// Result of a traversal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOutcome {
    /// The traversal ran to completion.
    Completed {
        /// Number of vertices handed to the sink.
        visited: usize,
    },
    /// The start vertex is not in the graph; nothing was visited.
    StartNotFound,
}

impl TraversalOutcome {
    /// Check whether the traversal ran.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Number of visited vertices (zero if the start was missing).
    pub fn visited(&self) -> usize {
        match self {
            Self::Completed { visited } => *visited,
            Self::StartNotFound => 0,
        }
    }
}

/// Reachability traversals over a [`PropertyGraph`].
///
/// Edges are followed from source to target only. Siblings are discovered
/// in edge insertion order, whichever [`AdjacencyMode`] is used:
/// `Indexed` reads the store's per-source index, `Scan` walks the full edge
/// list for every expanded vertex.
///
/// Targets missing from the vertex map (dangling edges) are never visited.
///
/// ## Example
///
/// ```rust
/// use skein_core::testing::GraphFixture;
/// use skein_engine::Traversal;
///
/// let fixture = GraphFixture::chain(3);
/// let traversal = Traversal::new(fixture.graph());
/// assert_eq!(traversal.bfs_order(1), Some(vec![1, 2, 3]));
/// assert_eq!(traversal.dfs_order(7), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Traversal<'g> {
    graph: &'g PropertyGraph,
    adjacency: AdjacencyMode,
}

impl<'g> Traversal<'g> {
    /// Create a traversal using the default adjacency strategy.
    pub fn new(graph: &'g PropertyGraph) -> Self {
        Self {
            graph,
            adjacency: AdjacencyMode::default(),
        }
    }

    /// Create a traversal configured from `config`.
    pub fn with_config(graph: &'g PropertyGraph, config: &TraversalConfig) -> Self {
        Self::new(graph).with_adjacency(config.adjacency)
    }

    /// Set the adjacency strategy.
    #[must_use]
    pub fn with_adjacency(mut self, adjacency: AdjacencyMode) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// The adjacency strategy in use.
    pub fn adjacency(&self) -> AdjacencyMode {
        self.adjacency
    }

    /// Breadth-first traversal from `start`.
    pub fn bfs<S: VisitSink + ?Sized>(&self, start: VertexId, sink: &mut S) -> TraversalOutcome {
        let Some(first) = self.graph.get_vertex(start) else {
            debug!("bfs: start vertex {start} does not exist");
            return TraversalOutcome::StartNotFound;
        };

        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([first]);
        let mut count = 0;
        let mut dangling = 0;

        while let Some(current) = queue.pop_front() {
            trace!("bfs: visiting vertex {}", current.id());
            sink.visit(current);
            count += 1;

            let mut cursor = 0;
            while let Some((next, target)) = self.next_target(current.id(), cursor) {
                cursor = next;
                if visited.contains(&target) {
                    continue;
                }
                match self.graph.get_vertex(target) {
                    Some(vertex) => {
                        visited.insert(target);
                        queue.push_back(vertex);
                    }
                    None => dangling += 1,
                }
            }
        }

        debug!("bfs from {start}: visited {count} vertices, skipped {dangling} dangling targets");
        TraversalOutcome::Completed { visited: count }
    }

    /// Depth-first pre-order traversal from `start`.
    ///
    /// A vertex's subtree is fully explored before the next edge leaving its
    /// parent is considered. Runs on an explicit stack of
    /// `(vertex, edge cursor)` frames, so graph depth is not bounded by the
    /// call stack.
    pub fn dfs<S: VisitSink + ?Sized>(&self, start: VertexId, sink: &mut S) -> TraversalOutcome {
        let Some(first) = self.graph.get_vertex(start) else {
            debug!("dfs: start vertex {start} does not exist");
            return TraversalOutcome::StartNotFound;
        };

        let mut visited = HashSet::from([start]);
        trace!("dfs: visiting vertex {start}");
        sink.visit(first);
        let mut count = 1;
        let mut dangling = 0;

        let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];
        while let Some(frame) = stack.last_mut() {
            let Some((next, target)) = self.next_target(frame.0, frame.1) else {
                stack.pop();
                continue;
            };
            frame.1 = next;

            if visited.contains(&target) {
                continue;
            }
            match self.graph.get_vertex(target) {
                Some(vertex) => {
                    visited.insert(target);
                    trace!("dfs: visiting vertex {target}");
                    sink.visit(vertex);
                    count += 1;
                    stack.push((target, 0));
                }
                None => dangling += 1,
            }
        }

        debug!("dfs from {start}: visited {count} vertices, skipped {dangling} dangling targets");
        TraversalOutcome::Completed { visited: count }
    }

    /// Vertex ids in breadth-first order, or `None` if `start` is missing.
    pub fn bfs_order(&self, start: VertexId) -> Option<Vec<VertexId>> {
        let mut order: Vec<VertexId> = Vec::new();
        self.bfs(start, &mut order).is_completed().then_some(order)
    }

    /// Vertex ids in depth-first order, or `None` if `start` is missing.
    pub fn dfs_order(&self, start: VertexId) -> Option<Vec<VertexId>> {
        let mut order: Vec<VertexId> = Vec::new();
        self.dfs(start, &mut order).is_completed().then_some(order)
    }

    /// The target of the first edge leaving `vertex` at or after `cursor`,
    /// with the cursor to resume from.
    fn next_target(&self, vertex: VertexId, cursor: usize) -> Option<(usize, VertexId)> {
        let edges = self.graph.edges();
        match self.adjacency {
            AdjacencyMode::Indexed => self
                .graph
                .outgoing_positions(vertex)
                .get(cursor)
                .map(|&slot| (cursor + 1, edges[slot].target())),
            AdjacencyMode::Scan => edges[cursor..]
                .iter()
                .position(|e| e.source() == vertex)
                .map(|offset| (cursor + offset + 1, edges[cursor + offset].target())),
        }
    }
}
