//! Shared error definitions for tool primitives.

use thiserror::Error;
use uuid::Error as UuidError;

/// Result alias used throughout the tool suite.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while manipulating primitive tool types.
#[derive(Debug, Error)]
pub enum Error {
    /// The provided request identifier could not be parsed.
    #[error("invalid request id: {source}")]
    InvalidRequestId {
        /// Source parsing error from the UUID library.
        #[from]
        source: UuidError,
    },

    /// Tool identifier failed validation.
    #[error("invalid tool id `{id}`: {reason}")]
    InvalidToolId {
        /// The offending identifier string.
        id: String,
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// Tool definition failed validation.
    #[error("invalid tool: {reason}")]
    InvalidTool {
        /// Human-readable reason for rejection.
        reason: String,
    },
}
