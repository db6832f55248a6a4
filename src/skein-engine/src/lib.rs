//! Traversal engine for Skein.
//!
//! - [`Traversal`]: breadth-first and depth-first reachability over a
//!   [`PropertyGraph`](skein_core::PropertyGraph)
//! - [`GoalSearch`]: breadth-first search over a concept hypergraph reached
//!   through a [`ConceptAccessor`](skein_storage::ConceptAccessor), stopping
//!   at the first concept a goal predicate accepts

mod search;
mod traversal;

pub use search::{pref_label_is, GoalSearch, SearchOutcome, SearchReport, SearchStats};
pub use traversal::{Traversal, TraversalOutcome, VisitSink};
