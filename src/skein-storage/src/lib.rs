//! Concept storage layer for Skein.
//!
//! This crate defines how the goal search reaches concept nodes that live
//! outside the process:
//!
//! - [`ConceptAccessor`]: fetches scoped handles to concepts and hyperedges
//! - [`ConceptView`] / [`HyperedgeView`]: read-only data exposed by a handle
//! - [`MemoryAccessor`]: an in-memory concept store with lease accounting
//!
//! # Handles
//!
//! A handle is acquired right before use and released when dropped. Fetches
//! distinguish three results:
//!
//! ```rust,ignore
//! match accessor.fetch_concept(id)? {   // Err(_): the store failed
//!     Some(concept) => { /* use it, released at end of scope */ }
//!     None => { /* no such concept */ }
//! }
//! ```

mod accessor;
mod lease;
mod memory;

pub use accessor::{ConceptAccessor, ConceptView, HyperedgeView};
pub use lease::{Lease, LeaseLedger, LeaseStats};
pub use memory::{MemoryAccessor, MemoryConcept, MemoryHyperedge, ThesaurusDocument};
