//! Wire-level request and response shapes.

use serde::{Deserialize, Serialize};

use tool_prompts::Instruction;

/// Body of the POST submitted to the processor endpoint.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// Raw input text, exactly as the user supplied it.
    pub text: String,
    /// Resolved instruction. Serialized as `null` when absent; tools without
    /// an instruction never reach the remote pipeline in practice.
    pub prompt: Option<String>,
    /// Identifier of the tool being run.
    pub tool_id: String,
}

impl ProcessRequest {
    /// Builds the request body for one invocation.
    #[must_use]
    pub fn new(text: impl Into<String>, tool_id: impl Into<String>, instruction: Option<&Instruction>) -> Self {
        Self {
            text: text.into(),
            prompt: instruction.map(|instruction| instruction.as_str().to_owned()),
            tool_id: tool_id.into(),
        }
    }
}

/// Structured body the processor returns on success.
#[derive(Debug, Default, Deserialize)]
pub struct ProcessorReply {
    /// Result content; preferred field.
    #[serde(default)]
    pub content: Option<String>,
    /// Error text some deployments return with a 200 status.
    #[serde(default)]
    pub error: Option<String>,
}

/// Structured body the processor returns with a non-success status.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorReply {
    /// Error message, when present.
    #[serde(default)]
    pub error: Option<String>,
}

/// Transport-level view of one completed HTTP exchange.
#[derive(Clone, Debug)]
pub struct RawResponse {
    status: u16,
    content_type: Option<String>,
    body: String,
}

impl RawResponse {
    /// Creates a response snapshot from status, content type, and body text.
    #[must_use]
    pub fn new(status: u16, content_type: Option<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// The `Content-Type` header value, if the processor sent one.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Whether the content type indicates a structured JSON body.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|value| value.contains("application/json"))
    }

    /// Body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
