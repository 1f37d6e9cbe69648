//! Unified error type definition

use thiserror::Error;

use crate::types::ResourceKind;

/// Core layer error type
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// A single provider call failed (network / auth / API error)
    #[error("fetch failed: {operation}: {message}")]
    Fetch {
        operation: &'static str,
        message: String,
    },

    /// A referenced ID was absent from a subsequent lookup
    #[error("{kind} not found: {id}")]
    NotFound { kind: ResourceKind, id: String },

    /// The focal kind has no relationship graph
    #[error("no graph available for {0}")]
    GraphUnsupported(ResourceKind),
}

impl CoreError {
    /// Shortcut for a failed provider call.
    pub fn fetch(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Fetch {
            operation,
            message: message.into(),
        }
    }

    /// Shortcut for a missing resource.
    pub fn not_found(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Core layer result type
pub type CoreResult<T> = Result<T, CoreError>;
