//! Request pipeline between the textsmith tools and the remote processor.
//!
//! One invocation of [`execute`] sends exactly one request (instruction,
//! raw input, and tool identifier) to the configured endpoint and
//! normalizes whatever comes back into an [`Outcome`]: renderable content
//! with a markup classification, or a displayable failure message. The
//! pipeline is stateless and reentrant; it imposes no queuing, retries, or
//! cancellation of its own.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod http_client;
mod outcome;
mod pipeline;
mod ports;
mod processor;
mod validate;
mod wire;

pub use error::{PipelineError, PipelineResult};
pub use outcome::{ContentFormat, Outcome, RenderedContent, looks_like_markup};
pub use pipeline::{NO_RESPONSE_PLACEHOLDER, execute};
pub use ports::{ContentSource, DirectoryResultSink, FileContentSource, MemorySink, ResultSink};
pub use processor::{HttpProcessor, PROCESSOR_URL_ENV, ProcessorConfig, TextProcessor};
pub use validate::validate;
pub use wire::{ErrorReply, ProcessRequest, ProcessorReply, RawResponse};
