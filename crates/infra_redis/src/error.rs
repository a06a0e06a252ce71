//! Store error types
//!
//! Failures below the repository boundary: connection establishment, command
//! round trips, and record (de)serialization. Everything crossing upward is
//! folded into the shared `AdapterError::Store` kind, keeping the underlying
//! error chained for diagnostics.

use thiserror::Error;

use core_kernel::AdapterError;

/// Errors that can occur talking to Redis or decoding what it returns
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to establish the connection at startup
    #[error("failed to connect to redis at '{url}': {message}")]
    ConnectionFailed { url: String, message: String },

    /// A command round trip failed after the connection was established
    #[error("redis command failed: {0}")]
    Command(#[from] redis::RedisError),

    /// A stored record did not parse as a voter
    #[error("malformed record at key '{key}'")]
    MalformedRecord {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A voter could not be serialized for storage
    #[error("failed to serialize record for key '{key}'")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Returns true if the error happened while establishing the connection
    pub fn is_connection_error(&self) -> bool {
        matches!(self, StoreError::ConnectionFailed { .. })
    }
}

impl From<StoreError> for AdapterError {
    fn from(error: StoreError) -> Self {
        AdapterError::store_with(error.to_string(), error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_record_names_the_key() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = StoreError::MalformedRecord {
            key: "voter:9".to_string(),
            source,
        };
        assert!(error.to_string().contains("voter:9"));
        assert!(!error.is_connection_error());
    }

    #[test]
    fn test_folds_into_store_failure() {
        let source = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        let error: AdapterError = StoreError::MalformedRecord {
            key: "voter:1".to_string(),
            source,
        }
        .into();
        assert!(error.is_store_failure());
        assert!(std::error::Error::source(&error).is_some());
    }
}
