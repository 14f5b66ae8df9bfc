//! Error types for reference resolution

use thiserror::Error;

use crate::client::ClientError;
use crate::registry::ResourceKind;

/// Errors that can occur while resolving a reference to a remote entity
#[derive(Debug, Error)]
pub enum LookupError {
    /// No entity matched the given slug or name
    #[error("No {} found matching '{value}'", .kind.display_name())]
    NotFound { kind: ResourceKind, value: String },

    /// More than one entity matched the given slug or name
    #[error("Ambiguous reference '{value}': {matches} {} entries match; use the numeric ID", .kind.display_name())]
    Ambiguous {
        kind: ResourceKind,
        value: String,
        matches: usize,
    },

    /// The inventory API call itself failed
    #[error("Inventory lookup failed: {0}")]
    Api(#[from] ClientError),
}

/// Result type for reference resolution
pub type LookupResult<T> = Result<T, LookupError>;
