//! Core error types for Skein.

use thiserror::Error;

/// Result type alias using `SkeinError`.
pub type SkeinResult<T> = std::result::Result<T, SkeinError>;

/// Core error type for Skein operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SkeinError {
    /// Graph structure error.
    #[error("GraphError: {0}")]
    GraphError(String),

    /// An edge names a vertex that is not in the store.
    #[error("DanglingEdge: edge {edge} references missing vertex {vertex}")]
    DanglingEdge {
        /// Identifier of the rejected edge.
        edge: i64,
        /// Identifier of the missing endpoint.
        vertex: i64,
    },

    /// A hyperedge that violates the hypergraph model (arity, membership).
    #[error("InvalidHyperedge: {0}")]
    InvalidHyperedge(String),

    /// Failure reported by a concept accessor (I/O, timeout, corruption).
    ///
    /// Distinct from an absent concept, which accessors report as `None`.
    #[error("StorageError: {0}")]
    StorageError(String),

    /// A bounded resource (e.g. open handle budget) is exhausted.
    #[error("ResourceExhausted: {0}")]
    ResourceExhausted(String),

    /// Invalid parameter provided.
    #[error("InvalidParameter: {0}")]
    InvalidParameter(String),

    /// Configuration could not be loaded or is inconsistent.
    #[error("ConfigError: {0}")]
    ConfigError(String),

    /// Internal error (bug in Skein).
    #[error("InternalError: {0}")]
    InternalError(String),

    /// IO error.
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("SerdeJsonError: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl SkeinError {
    /// Create a new `GraphError`.
    pub fn graph<S: Into<String>>(msg: S) -> Self {
        Self::GraphError(msg.into())
    }

    /// Create a new `InvalidHyperedge` error.
    pub fn invalid_hyperedge<S: Into<String>>(msg: S) -> Self {
        Self::InvalidHyperedge(msg.into())
    }

    /// Create a new `StorageError`.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Self::StorageError(msg.into())
    }

    /// Create a new `ResourceExhausted` error.
    pub fn resource_exhausted<S: Into<String>>(msg: S) -> Self {
        Self::ResourceExhausted(msg.into())
    }

    /// Create a new `InvalidParameter` error.
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create a new `ConfigError`.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a new `InternalError`.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::InternalError(msg.into())
    }

    /// Whether the error originated in an accessor or the filesystem.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::StorageError(_) | Self::IoError(_) | Self::ResourceExhausted(_)
        )
    }
}

/// Ensure a condition holds, returning a `GraphError` if not.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident: $($msg:tt)*) => {
        if !$cond {
            return Err($crate::SkeinError::$variant(format!($($msg)*)));
        }
    };
    ($cond:expr, $msg:expr) => {
        if !$cond {
            return Err($crate::SkeinError::GraphError($msg.to_string()));
        }
    };
}
