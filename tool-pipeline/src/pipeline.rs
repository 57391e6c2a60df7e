//! Orchestration of one tool request against the processor.

use tracing::{debug, warn};

use tool_primitives::RequestId;
use tool_prompts::Instruction;

use crate::outcome::Outcome;
use crate::processor::TextProcessor;
use crate::wire::{ErrorReply, ProcessRequest, ProcessorReply, RawResponse};

/// Placeholder shown when a structured success body carries neither content
/// nor an error message.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response received";

/// Runs one tool request through the processor.
///
/// Sends exactly one request and folds every failure path (transport
/// errors, non-success statuses, malformed bodies) into a failure
/// [`Outcome`]; nothing propagates as an error. The pipeline holds no state
/// between invocations, so concurrent calls are safe; serializing
/// user-facing submissions (the busy flag) is the caller's concern.
pub async fn execute(
    processor: &dyn TextProcessor,
    input: &str,
    tool_id: &str,
    instruction: Option<&Instruction>,
) -> Outcome {
    let request_id = RequestId::random();
    let request = ProcessRequest::new(input, tool_id, instruction);

    debug!(%request_id, tool_id, "submitting processor request");

    let raw = match processor.submit(&request).await {
        Ok(raw) => raw,
        Err(err) => {
            warn!(%request_id, tool_id, error = %err, "processor request failed");
            return Outcome::failure(err.to_string());
        }
    };

    if !raw.is_success() {
        let message = extract_error_message(&raw);
        warn!(%request_id, tool_id, status = raw.status(), "processor returned an error");
        return Outcome::failure(message);
    }

    if raw.is_json() {
        match serde_json::from_str::<ProcessorReply>(raw.body()) {
            Ok(reply) => {
                // Empty strings fall through like absent fields.
                let content = reply
                    .content
                    .filter(|content| !content.is_empty())
                    .or(reply.error.filter(|error| !error.is_empty()))
                    .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_owned());
                debug!(%request_id, tool_id, "processor request succeeded");
                Outcome::success(content)
            }
            Err(err) => {
                warn!(%request_id, tool_id, error = %err, "processor returned malformed JSON");
                Outcome::failure(format!("failed to decode processor response: {err}"))
            }
        }
    } else {
        debug!(%request_id, tool_id, "processor request succeeded");
        Outcome::success(raw.body().to_owned())
    }
}

/// Error-message extraction for non-success responses: the structured
/// `error` field when the body parses, the raw body text otherwise, and a
/// status line when even that is empty.
fn extract_error_message(raw: &RawResponse) -> String {
    let message = serde_json::from_str::<ErrorReply>(raw.body())
        .ok()
        .and_then(|reply| reply.error)
        .filter(|error| !error.is_empty())
        .unwrap_or_else(|| raw.body().to_owned());

    if message.is_empty() {
        format!("HTTP error! status: {}", raw.status())
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::error::{PipelineError, PipelineResult};

    use super::*;

    /// Scripted processor returning a canned response or error.
    struct StaticProcessor {
        reply: PipelineResult<RawResponse>,
    }

    impl StaticProcessor {
        fn responding(status: u16, content_type: Option<&str>, body: &str) -> Self {
            Self {
                reply: Ok(RawResponse::new(
                    status,
                    content_type.map(str::to_owned),
                    body,
                )),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                reply: Err(PipelineError::transport(reason)),
            }
        }
    }

    #[async_trait]
    impl TextProcessor for StaticProcessor {
        async fn submit(&self, _request: &ProcessRequest) -> PipelineResult<RawResponse> {
            match &self.reply {
                Ok(raw) => Ok(raw.clone()),
                Err(PipelineError::Transport { reason }) => {
                    Err(PipelineError::transport(reason.clone()))
                }
                Err(_) => unreachable!("tests only script transport errors"),
            }
        }
    }

    #[tokio::test]
    async fn error_status_extracts_structured_message() {
        let processor = StaticProcessor::responding(
            400,
            Some("application/json"),
            r#"{"error":"bad input"}"#,
        );
        let outcome = execute(&processor, "text", "proofreading", None).await;
        assert_eq!(outcome.failure_message(), Some("bad input"));
    }

    #[tokio::test]
    async fn error_status_falls_back_to_raw_body() {
        let processor = StaticProcessor::responding(500, Some("text/plain"), "upstream exploded");
        let outcome = execute(&processor, "text", "proofreading", None).await;
        assert_eq!(outcome.failure_message(), Some("upstream exploded"));
    }

    #[tokio::test]
    async fn empty_error_body_reports_status() {
        let processor = StaticProcessor::responding(503, None, "");
        let outcome = execute(&processor, "text", "proofreading", None).await;
        assert_eq!(outcome.failure_message(), Some("HTTP error! status: 503"));
    }

    #[tokio::test]
    async fn json_success_prefers_content_field() {
        let processor = StaticProcessor::responding(
            200,
            Some("application/json"),
            r#"{"content":"<p>Hi</p>"}"#,
        );
        let outcome = execute(&processor, "text", "proofreading", None).await;
        let content = outcome.content().expect("content");
        assert_eq!(content.text(), "<p>Hi</p>");
        assert!(content.is_markup());
    }

    #[tokio::test]
    async fn json_success_falls_back_to_error_field() {
        let processor = StaticProcessor::responding(
            200,
            Some("application/json"),
            r#"{"error":"quota exceeded"}"#,
        );
        let outcome = execute(&processor, "text", "proofreading", None).await;
        assert_eq!(outcome.content().expect("content").text(), "quota exceeded");
    }

    #[tokio::test]
    async fn json_success_without_fields_uses_placeholder() {
        let processor = StaticProcessor::responding(200, Some("application/json"), "{}");
        let outcome = execute(&processor, "text", "proofreading", None).await;
        assert_eq!(
            outcome.content().expect("content").text(),
            NO_RESPONSE_PLACEHOLDER
        );
    }

    #[tokio::test]
    async fn empty_content_falls_through_to_error_field() {
        let processor = StaticProcessor::responding(
            200,
            Some("application/json"),
            r#"{"content":"","error":"quota exceeded"}"#,
        );
        let outcome = execute(&processor, "text", "proofreading", None).await;
        assert_eq!(outcome.content().expect("content").text(), "quota exceeded");
    }

    #[tokio::test]
    async fn empty_content_and_error_use_placeholder() {
        let processor = StaticProcessor::responding(
            200,
            Some("application/json"),
            r#"{"content":"","error":""}"#,
        );
        let outcome = execute(&processor, "text", "proofreading", None).await;
        assert_eq!(
            outcome.content().expect("content").text(),
            NO_RESPONSE_PLACEHOLDER
        );
    }

    #[tokio::test]
    async fn non_json_success_returns_body_text() {
        let processor = StaticProcessor::responding(200, Some("text/plain"), "Hello world");
        let outcome = execute(&processor, "text", "proofreading", None).await;
        let content = outcome.content().expect("content");
        assert_eq!(content.text(), "Hello world");
        assert!(!content.is_markup());
    }

    #[tokio::test]
    async fn malformed_json_success_becomes_failure() {
        let processor =
            StaticProcessor::responding(200, Some("application/json"), "not json at all");
        let outcome = execute(&processor, "text", "proofreading", None).await;
        assert!(!outcome.is_success());
    }

    #[tokio::test]
    async fn transport_error_becomes_failure_outcome() {
        let processor = StaticProcessor::failing("connection refused");
        let outcome = execute(&processor, "text", "proofreading", None).await;
        let message = outcome.failure_message().expect("failure");
        assert!(message.contains("connection refused"));
        assert!(outcome.display_text().starts_with("**Error:**"));
    }
}
