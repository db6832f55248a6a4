//! Configuration management for Skein.
//!
//! Provides runtime configuration for the graph store, the traversal engine,
//! the concept accessor and logging.

use std::path::Path;

use common_error::{SkeinError, SkeinResult};
use serde::{Deserialize, Serialize};

/// Global Skein configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkeinConfig {
    /// Graph store configuration.
    pub graph: GraphConfig,
    /// Traversal engine configuration.
    pub traversal: TraversalConfig,
    /// Concept accessor configuration.
    pub storage: StorageConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl SkeinConfig {
    /// Parse a configuration from a JSON document.
    ///
    /// Sections and fields missing from the document keep their defaults.
    pub fn from_json_str(json: &str) -> SkeinResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> SkeinResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SkeinError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> SkeinResult<()> {
        self.storage.validate()?;
        if self.logging.filter.trim().is_empty() {
            return Err(SkeinError::config("logging.filter must not be empty"));
        }
        Ok(())
    }

    /// Set the edge insertion policy.
    #[must_use]
    pub fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.graph.edge_policy = policy;
        self
    }

    /// Set the adjacency strategy used by traversals.
    #[must_use]
    pub fn with_adjacency(mut self, mode: AdjacencyMode) -> Self {
        self.traversal.adjacency = mode;
        self
    }

    /// Limit the number of concurrently open accessor handles.
    #[must_use]
    pub fn with_max_open_handles(mut self, limit: Option<usize>) -> Self {
        self.storage.max_open_handles = limit;
        self
    }
}

/// Graph store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// What to do with edges whose endpoints are not in the store.
    pub edge_policy: EdgePolicy,
}

/// Policy for edges that reference vertices missing from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Accept dangling endpoints; traversals never emit them.
    #[default]
    Tolerate,
    /// Reject the edge with `SkeinError::DanglingEdge`.
    Validate,
}

/// Traversal engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// How outgoing edges are located during expansion.
    pub adjacency: AdjacencyMode,
}

/// Strategy for finding the edges that leave a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyMode {
    /// Use the per-source index maintained by the store.
    #[default]
    Indexed,
    /// Scan the whole edge collection for every expanded vertex.
    Scan,
}

/// Concept accessor configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Maximum number of handles open at the same time. `None` = unlimited.
    pub max_open_handles: Option<usize>,
}

impl StorageConfig {
    /// Reject a zero handle budget, under which no fetch could succeed.
    pub fn validate(&self) -> SkeinResult<()> {
        if self.max_open_handles == Some(0) {
            return Err(SkeinError::config(
                "storage.max_open_handles must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `"info"` or `"skein_engine=debug"`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
