//! Skein Playground - sample data and demos
//!
//! This crate provides sample graphs and an executable for experimenting
//! with Skein's traversal and goal search.
//!
//! # Available Binaries
//!
//! - **`skein-demo`**: lists the sample social graph, runs BFS and DFS over
//!   it, then searches the sample thesaurus for a concept by label
//!
//! # Usage
//!
//! ```bash
//! cargo run --package skein-playground --bin skein-demo -- --start 1 --goal "Physical chemistry"
//! ```

pub mod data;
pub mod utils;

pub use data::{create_social_graph, create_social_graph_with, create_thesaurus};
pub use utils::{format_path, format_properties, print_divider, print_header};
