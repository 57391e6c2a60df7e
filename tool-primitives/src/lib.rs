//! Core shared types for the textsmith tool suite.

#![warn(missing_docs, clippy::pedantic)]

mod catalog;
mod error;
mod ids;
mod selection;
mod tool;

/// Static tool registry and the identifiers of the built-in tools.
pub use catalog::{ToolCatalog, standard_catalog, tool_ids};
/// Error type and result alias shared across the suite.
pub use error::{Error, Result};
/// Validated tool identifier and per-request correlation id.
pub use ids::{RequestId, ToolId};
/// User-chosen options that refine a tool's behavior.
pub use selection::{SelectionBag, SelectionField};
/// Tool descriptors and supporting builders.
pub use tool::{Tool, ToolBuilder, ToolCategory, ToolKind};
