//! Shared error taxonomy
//!
//! Every port and adapter in the system reports one of these kinds. They
//! propagate unchanged from the repository through the domain adapters up to
//! the transport layer, which maps them onto HTTP statuses. No layer retries
//! on its own; retry policy belongs to callers.

use std::fmt;
use thiserror::Error;

/// Errors reported by repository and domain adapter operations
#[derive(Debug, Error)]
pub enum AdapterError {
    /// A caller-supplied identifier or field fails a domain precondition
    /// (non-positive id, blank name or email). Never reaches the store.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        message: String,
        field: Option<&'static str>,
    },

    /// The referenced voter or history entry does not exist
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Attempted creation of a voter id, or a history poll id under its
    /// owning voter, that already exists
    #[error("{entity} with id {id} already exists")]
    AlreadyExists { entity: &'static str, id: String },

    /// A concurrent write modified the record between fetch and write-back.
    /// Raised by the version check on update; callers may re-read and retry.
    #[error("conflict: {message}")]
    Conflict { message: String },

    /// The backing store is unreachable, returned a malformed record, or a
    /// batch operation failed. Wraps the underlying error for diagnostics.
    #[error("store failure: {message}")]
    Store {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AdapterError {
    /// Creates an InvalidArgument error without field information
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AdapterError::InvalidArgument {
            message: message.into(),
            field: None,
        }
    }

    /// Creates an InvalidArgument error naming the offending field
    pub fn invalid_field(message: impl Into<String>, field: &'static str) -> Self {
        AdapterError::InvalidArgument {
            message: message.into(),
            field: Some(field),
        }
    }

    /// Creates a NotFound error for an entity type and identifier
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        AdapterError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates an AlreadyExists error for an entity type and identifier
    pub fn already_exists(entity: &'static str, id: impl fmt::Display) -> Self {
        AdapterError::AlreadyExists {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates a Conflict error for a concurrent-modification outcome
    pub fn conflict(message: impl Into<String>) -> Self {
        AdapterError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Store error without an underlying cause
    pub fn store(message: impl Into<String>) -> Self {
        AdapterError::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Store error wrapping the underlying transport error
    pub fn store_with(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        AdapterError::Store {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns true if the target of the operation was absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, AdapterError::NotFound { .. })
    }

    /// Returns true if the operation clashed with existing or concurrent data
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            AdapterError::AlreadyExists { .. } | AdapterError::Conflict { .. }
        )
    }

    /// Returns true if the caller's input failed a precondition
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, AdapterError::InvalidArgument { .. })
    }

    /// Returns true if the backing store failed
    pub fn is_store_failure(&self) -> bool {
        matches!(self, AdapterError::Store { .. })
    }
}
