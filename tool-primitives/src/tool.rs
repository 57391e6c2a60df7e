//! Tool descriptors shared across the suite.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ids::ToolId;
use crate::selection::SelectionField;

const MAX_NAME_LEN: usize = 96;

/// Grouping used when presenting the catalog.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolCategory {
    /// Editing and correction tools.
    ContentEditing,
    /// Outline, table, and FAQ generators.
    ContentStructuring,
    /// Translation and related accessibility tools.
    ContentAccessibility,
    /// Tone, voice, length, and word-choice rewriting.
    ContentOptimization,
    /// Search-engine oriented generators.
    Seo,
    /// Local statistics and scoring.
    ContentAnalysis,
}

impl ToolCategory {
    /// Display title for the category.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ContentEditing => "Content Editing",
            Self::ContentStructuring => "Content Structuring",
            Self::ContentAccessibility => "Content Accessibility",
            Self::ContentOptimization => "Content Optimization",
            Self::Seo => "SEO",
            Self::ContentAnalysis => "Content Analysis",
        }
    }

    /// Short description shown alongside the title.
    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::ContentEditing => "Perfect your content with AI-powered editing tools",
            Self::ContentStructuring => "Organize and structure your content effectively",
            Self::ContentAccessibility => "Make your content accessible to everyone",
            Self::ContentOptimization => "Optimize your content for maximum impact",
            Self::Seo => "Optimize your content for search engines",
            Self::ContentAnalysis => "Analyze your content performance and metrics",
        }
    }
}

/// How a tool produces its output.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    /// Output comes from the remote text processor.
    Remote {
        /// Selection the user must make before the tool can run, if any.
        required_selection: Option<SelectionField>,
    },
    /// Output is computed locally without contacting the processor.
    LocalAnalysis,
}

impl ToolKind {
    /// A remote tool with no required selection.
    #[must_use]
    pub const fn remote() -> Self {
        Self::Remote {
            required_selection: None,
        }
    }

    /// A remote tool that cannot run until `field` is chosen.
    #[must_use]
    pub const fn remote_with(field: SelectionField) -> Self {
        Self::Remote {
            required_selection: Some(field),
        }
    }
}

/// Describes one text-transformation tool exposed to users.
///
/// Catalog entries are immutable; they are created at process start from the
/// static registry and never mutated afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    id: ToolId,
    name: String,
    description: String,
    category: ToolCategory,
    kind: ToolKind,
}

impl Tool {
    /// Starts building a tool descriptor.
    #[must_use]
    pub fn builder(id: ToolId) -> ToolBuilder {
        ToolBuilder {
            id,
            name: None,
            description: None,
            category: None,
            kind: ToolKind::remote(),
        }
    }

    /// Returns the unique tool identifier.
    #[must_use]
    pub fn id(&self) -> &ToolId {
        &self.id
    }

    /// Human-friendly tool name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tool description shown in the catalog.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Category the tool is listed under.
    #[must_use]
    pub const fn category(&self) -> ToolCategory {
        self.category
    }

    /// How the tool produces its output.
    #[must_use]
    pub const fn kind(&self) -> ToolKind {
        self.kind
    }

    /// Returns `true` when the tool's output is computed locally.
    #[must_use]
    pub const fn is_local_analysis(&self) -> bool {
        matches!(self.kind, ToolKind::LocalAnalysis)
    }

    /// Selection field that must be set before this tool may run, if any.
    #[must_use]
    pub const fn required_selection(&self) -> Option<SelectionField> {
        match self.kind {
            ToolKind::Remote { required_selection } => required_selection,
            ToolKind::LocalAnalysis => None,
        }
    }

    /// File name offered when a result produced by this tool is saved.
    #[must_use]
    pub fn result_file_name(&self) -> String {
        let stem: String = self
            .name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!("{stem}_result.txt")
    }
}

/// Builder for [`Tool`].
pub struct ToolBuilder {
    id: ToolId,
    name: Option<String>,
    description: Option<String>,
    category: Option<ToolCategory>,
    kind: ToolKind,
}

impl ToolBuilder {
    /// Sets the display name for the tool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTool`] if the name is empty or exceeds the
    /// maximum supported length.
    pub fn name(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidTool {
                reason: "name cannot be empty".into(),
            });
        }
        if name.len() > MAX_NAME_LEN {
            return Err(Error::InvalidTool {
                reason: format!("name length must be <= {MAX_NAME_LEN}"),
            });
        }
        self.name = Some(name);
        Ok(self)
    }

    /// Sets the catalog description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the category the tool is listed under.
    #[must_use]
    pub fn category(mut self, category: ToolCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets how the tool produces its output.
    #[must_use]
    pub fn kind(mut self, kind: ToolKind) -> Self {
        self.kind = kind;
        self
    }

    /// Finalises the tool descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTool`] if required fields are missing.
    pub fn build(self) -> Result<Tool> {
        let name = self.name.ok_or_else(|| Error::InvalidTool {
            reason: "name must be provided".into(),
        })?;

        let description = self.description.ok_or_else(|| Error::InvalidTool {
            reason: "description must be provided".into(),
        })?;

        let category = self.category.ok_or_else(|| Error::InvalidTool {
            reason: "category must be provided".into(),
        })?;

        Ok(Tool {
            id: self.id,
            name,
            description,
            category,
            kind: self.kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_tool_success() {
        let id = ToolId::new("change-voice").expect("id");
        let tool = Tool::builder(id)
            .name("Change Voice")
            .map(|b| b.description("Switch between active and passive voice."))
            .map(|b| b.category(ToolCategory::ContentOptimization))
            .map(|b| b.kind(ToolKind::remote_with(SelectionField::Voice)))
            .and_then(ToolBuilder::build)
            .expect("build");

        assert_eq!(tool.name(), "Change Voice");
        assert_eq!(tool.required_selection(), Some(SelectionField::Voice));
        assert!(!tool.is_local_analysis());
    }

    #[test]
    fn tool_requires_name() {
        let id = ToolId::new("proofreading").expect("id");
        let err = Tool::builder(id)
            .description("desc")
            .category(ToolCategory::ContentEditing)
            .build()
            .expect_err("should fail");

        assert!(matches!(err, Error::InvalidTool { .. }));
    }

    #[test]
    fn local_analysis_never_requires_selection() {
        let id = ToolId::new("count-analyzer").expect("id");
        let tool = Tool::builder(id)
            .name("Count Analyzer")
            .map(|b| b.description("Counts things."))
            .map(|b| b.category(ToolCategory::ContentAnalysis))
            .map(|b| b.kind(ToolKind::LocalAnalysis))
            .and_then(ToolBuilder::build)
            .expect("build");

        assert!(tool.is_local_analysis());
        assert_eq!(tool.required_selection(), None);
    }

    #[test]
    fn result_file_name_replaces_whitespace() {
        let id = ToolId::new("make-longer-shorter").expect("id");
        let tool = Tool::builder(id)
            .name("Make Longer/Make Shorter")
            .map(|b| b.description("Adjust length."))
            .map(|b| b.category(ToolCategory::ContentOptimization))
            .and_then(ToolBuilder::build)
            .expect("build");

        assert_eq!(tool.result_file_name(), "Make_Longer/Make_Shorter_result.txt");
    }
}
