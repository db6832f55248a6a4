//! Error types and result aliases for Skein.
//!
//! Every crate in the workspace reports failures through [`SkeinError`].
//! Defined negative outcomes (a missing start vertex, no path found) are
//! not errors and are modelled by the callers' own outcome types.

mod error;

pub use error::{SkeinError, SkeinResult};
