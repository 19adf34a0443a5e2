//! Error types for designgraph-ir
//!
//! Only root-level failures surface through [`DesignGraphError`]. Per-node and
//! per-value failures are absorbed where they happen (see
//! [`crate::features::style_extraction::Rejection`] and
//! [`crate::features::traversal::Truncation`]).

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for designgraph-ir operations
#[derive(Debug, Error)]
pub enum DesignGraphError {
    /// The host document could not be read at all (no roots, empty selection)
    #[error("Cannot read design document: {reason}")]
    HostAccess { reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DesignGraphError {
    /// Create a host access error
    pub fn host_access(reason: impl Into<String>) -> Self {
        DesignGraphError::HostAccess {
            reason: reason.into(),
        }
    }

    /// True when the invocation failed because the input itself was unusable
    pub fn is_host_access(&self) -> bool {
        matches!(self, DesignGraphError::HostAccess { .. })
    }
}

/// Result type alias for designgraph operations
pub type Result<T> = std::result::Result<T, DesignGraphError>;
