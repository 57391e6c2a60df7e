//! Error taxonomy for the request pipeline.

use thiserror::Error;

/// Result alias used by the pipeline.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors raised while preparing or performing a processor request.
///
/// Transport and response errors never escape [`execute`](crate::execute);
/// they are folded into a failure [`Outcome`](crate::Outcome) there.
/// Validation and configuration errors surface before any request is made.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The pipeline is misconfigured (bad endpoint, missing environment).
    #[error("processor not configured: {reason}")]
    Configuration {
        /// Additional context for the failure.
        reason: String,
    },

    /// The request was rejected locally before any network traffic.
    #[error("{reason}")]
    Validation {
        /// User-facing message naming what is missing.
        reason: String,
    },

    /// Transport-level failures (connect, read, encode, timeout).
    #[error("processor transport error: {reason}")]
    Transport {
        /// Additional context about the error.
        reason: String,
    },

    /// The processor returned a response the pipeline could not use.
    #[error("processor response error: {reason}")]
    Response {
        /// Additional context about the response failure.
        reason: String,
    },

    /// Local I/O failure in one of the platform ports.
    #[error("i/o failure: {source}")]
    Io {
        /// Underlying filesystem error.
        #[from]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// Convenience constructor for configuration issues.
    #[must_use]
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Convenience constructor for local validation rejections.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Convenience constructor for transport failures.
    #[must_use]
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    /// Convenience constructor for unusable responses.
    #[must_use]
    pub fn response(reason: impl Into<String>) -> Self {
        Self::Response {
            reason: reason.into(),
        }
    }
}
