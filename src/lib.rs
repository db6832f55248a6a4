//! Skein - in-memory property graph traversal and concept hypergraph search
//!
//! Skein stores a directed property graph for breadth-first and depth-first
//! reachability, and runs goal-directed searches over a concept hypergraph
//! reached through scoped accessor handles.
//!
//! ```rust
//! use skein::core::{Edge, PropertyGraph, Vertex};
//! use skein::engine::Traversal;
//!
//! let mut graph = PropertyGraph::new();
//! graph.add_vertex(Vertex::new(1).with_property("name", "Alice"));
//! graph.add_vertex(Vertex::new(2).with_property("name", "Bob"));
//! graph.add_edge(Edge::new(1, 1, 2).with_property("relationship", "friends"))?;
//!
//! assert_eq!(Traversal::new(&graph).bfs_order(1), Some(vec![1, 2]));
//! # Ok::<(), skein::error::SkeinError>(())
//! ```

#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Re-export workspace crates
pub use common_config as config;
pub use common_error as error;
pub use skein_core as core;
pub use skein_engine as engine;
pub use skein_storage as storage;

/// Skein version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
