//! Static registry of the built-in tools.

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::ids::ToolId;
use crate::selection::SelectionField;
use crate::tool::{Tool, ToolBuilder, ToolCategory, ToolKind};

/// Identifiers of the built-in tools.
///
/// Shared by the registry, the instruction catalog, and the local-analysis
/// dispatch so no identifier is spelled twice.
pub mod tool_ids {
    /// Spelling, grammar, and style check.
    pub const PROOFREADING: &str = "proofreading";
    /// Rewrite with different wording.
    pub const PARAPHRASING: &str = "paraphrasing";
    /// Make text more engaging and human-like.
    pub const AI_HUMANIZER: &str = "ai-humanizer";
    /// Condense text into a summary.
    pub const AI_SUMMARIZER: &str = "ai-summarizer";
    /// Generate a structured outline.
    pub const OUTLINE_GENERATION: &str = "outline-generation";
    /// Break long sentences apart.
    pub const SPLIT_SENTENCE: &str = "split-sentence";
    /// Convert content into a table.
    pub const TABLE_GENERATOR: &str = "table-generator";
    /// Generate frequently asked questions.
    pub const FAQ_GENERATOR: &str = "faq-generator";
    /// Generate a glossary of terms.
    pub const GLOSSARY_GENERATOR: &str = "glossary-generator";
    /// Translate into a chosen language.
    pub const LANGUAGE_TRANSLATION: &str = "language-translation";
    /// Improve word choices.
    pub const WORD_CHOICE_OPTIMIZATION: &str = "word-choice-optimization";
    /// Rewrite in a chosen tone.
    pub const CHANGE_TONE: &str = "change-tone";
    /// Lengthen or shorten the text.
    pub const MAKE_LONGER_SHORTER: &str = "make-longer-shorter";
    /// Convert between active and passive voice.
    pub const CHANGE_VOICE: &str = "change-voice";
    /// Convert between direct and indirect speech.
    pub const CHANGE_SPEECH: &str = "change-speech";
    /// Generate SEO meta descriptions.
    pub const SEO_DESCRIPTION_GENERATOR: &str = "seo-description-generator";
    /// Recommend content tags.
    pub const TAG_RECOMMENDER: &str = "tag-recommender";
    /// Recommend titles.
    pub const TITLE_RECOMMENDER: &str = "title-recommender";
    /// Local word/character/sentence statistics.
    pub const COUNT_ANALYZER: &str = "count-analyzer";
    /// Local readability scoring.
    pub const READABILITY_SCORE: &str = "readability-score";
}

/// Immutable collection of tool descriptors, keyed by identifier.
#[derive(Clone, Debug)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
}

impl ToolCatalog {
    /// Builds the standard catalog of built-in tools.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTool`](crate::Error::InvalidTool) or
    /// [`Error::InvalidToolId`](crate::Error::InvalidToolId) if a registry
    /// entry fails validation.
    pub fn standard() -> Result<Self> {
        use crate::catalog::tool_ids as id;
        use crate::tool::ToolCategory as Cat;

        let tools = vec![
            entry(
                id::PROOFREADING,
                "Proofreading",
                "Analyse the content for spell check, grammatical error, style inconsistencies.",
                Cat::ContentEditing,
                ToolKind::remote(),
            )?,
            entry(
                id::PARAPHRASING,
                "Paraphrasing",
                "Paraphrasing tool to rewrite the content with different words while maintaining the original meaning.",
                Cat::ContentEditing,
                ToolKind::remote(),
            )?,
            entry(
                id::AI_HUMANIZER,
                "AI Humanizer",
                "AI Humanizer tool to make the content more engaging and human-like by adjusting tone, style, and readability.",
                Cat::ContentEditing,
                ToolKind::remote(),
            )?,
            entry(
                id::AI_SUMMARIZER,
                "AI Summarizer",
                "AI Summarizer tool to condense long articles into concise summaries while retaining key information.",
                Cat::ContentEditing,
                ToolKind::remote(),
            )?,
            entry(
                id::OUTLINE_GENERATION,
                "Outline Generation",
                "Automatically generate structured outlines for articles based on the provided content or topic.",
                Cat::ContentStructuring,
                ToolKind::remote(),
            )?,
            entry(
                id::SPLIT_SENTENCE,
                "Split Sentence",
                "Split long sentences into shorter, more readable ones to enhance clarity and comprehension.",
                Cat::ContentStructuring,
                ToolKind::remote(),
            )?,
            entry(
                id::TABLE_GENERATOR,
                "Table Generator",
                "Generate tables from content present information in a clear and organized manner.",
                Cat::ContentStructuring,
                ToolKind::remote(),
            )?,
            entry(
                id::FAQ_GENERATOR,
                "FAQ Generator",
                "Automatically generate frequently asked questions (FAQs) based on the content to enhance user engagement.",
                Cat::ContentStructuring,
                ToolKind::remote(),
            )?,
            entry(
                id::GLOSSARY_GENERATOR,
                "Glossary Generator",
                "Generate a glossary of terms and definitions related to the content to enhance understanding.",
                Cat::ContentStructuring,
                ToolKind::remote(),
            )?,
            entry(
                id::LANGUAGE_TRANSLATION,
                "Language Translation",
                "Translate articles into multiple languages to reach a wider audience and enhance accessibility.",
                Cat::ContentAccessibility,
                ToolKind::remote_with(SelectionField::TargetLanguage),
            )?,
            entry(
                id::WORD_CHOICE_OPTIMIZATION,
                "Word Choice Optimization",
                "Optimize word choices to enhance clarity, engagement, and overall quality of the content.",
                Cat::ContentOptimization,
                ToolKind::remote(),
            )?,
            entry(
                id::CHANGE_TONE,
                "Change Tone",
                "Change the tone of the content to suit different audiences or purposes, such as formal, informal, persuasive, etc.",
                Cat::ContentOptimization,
                ToolKind::remote_with(SelectionField::Tone),
            )?,
            entry(
                id::MAKE_LONGER_SHORTER,
                "Make Longer/Make Shorter",
                "Adjust the length of the content by making it longer or shorter based on the requirements.",
                Cat::ContentOptimization,
                ToolKind::remote_with(SelectionField::LengthDirection),
            )?,
            entry(
                id::CHANGE_VOICE,
                "Change Voice",
                "Change the voice of the content to suit different audiences or purposes, such as active, passive, etc.",
                Cat::ContentOptimization,
                ToolKind::remote_with(SelectionField::Voice),
            )?,
            entry(
                id::CHANGE_SPEECH,
                "Change Speech",
                "Change the speech of the content to suit different purposes, such as direct, indirect.",
                Cat::ContentOptimization,
                ToolKind::remote_with(SelectionField::SpeechForm),
            )?,
            entry(
                id::SEO_DESCRIPTION_GENERATOR,
                "SEO Description Generator",
                "Generate SEO-friendly descriptions for articles to improve search engine visibility and click-through rates.",
                Cat::Seo,
                ToolKind::remote(),
            )?,
            entry(
                id::TAG_RECOMMENDER,
                "Tag Recommender",
                "Recommend relevant tags for articles to enhance discoverability and categorization.",
                Cat::Seo,
                ToolKind::remote(),
            )?,
            entry(
                id::TITLE_RECOMMENDER,
                "Title Recommender",
                "Recommend catchy and SEO-friendly titles for articles to improve search engine rankings and user engagement.",
                Cat::Seo,
                ToolKind::remote(),
            )?,
            entry(
                id::COUNT_ANALYZER,
                "Count Analyzer",
                "Analyze the content for word count, character count, sentence count, and paragraph count.",
                Cat::ContentAnalysis,
                ToolKind::LocalAnalysis,
            )?,
            entry(
                id::READABILITY_SCORE,
                "Readability Score",
                "Analyze the content for readability score, ensuring it is easy to read and understand.",
                Cat::ContentAnalysis,
                ToolKind::LocalAnalysis,
            )?,
        ];

        Ok(Self { tools })
    }

    /// Looks up a tool by identifier.
    #[must_use]
    pub fn get(&self, id: &ToolId) -> Option<&Tool> {
        self.get_str(id.as_str())
    }

    /// Looks up a tool by raw identifier string.
    #[must_use]
    pub fn get_str(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.id().as_str() == id)
    }

    /// Iterates over every tool in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }

    /// Iterates over the tools listed under `category`.
    pub fn in_category(&self, category: ToolCategory) -> impl Iterator<Item = &Tool> {
        self.tools
            .iter()
            .filter(move |tool| tool.category() == category)
    }

    /// Number of tools in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

fn entry(
    id: &str,
    name: &str,
    description: &str,
    category: ToolCategory,
    kind: ToolKind,
) -> Result<Tool> {
    Tool::builder(ToolId::new(id)?)
        .name(name)?
        .description(description)
        .category(category)
        .kind(kind)
        .build()
}

static STANDARD: Lazy<ToolCatalog> =
    Lazy::new(|| ToolCatalog::standard().expect("built-in tool registry is valid"));

/// Returns the process-wide standard catalog.
///
/// # Panics
///
/// Panics on first access if a built-in registry entry is invalid. The
/// registry is constant and verified by tests.
#[must_use]
pub fn standard_catalog() -> &'static ToolCatalog {
    &STANDARD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_builds() {
        let catalog = ToolCatalog::standard().expect("catalog");
        assert_eq!(catalog.len(), 20);
    }

    #[test]
    fn lookup_by_id_and_str_agree() {
        let catalog = standard_catalog();
        let id = ToolId::new(tool_ids::CHANGE_TONE).expect("id");
        assert_eq!(catalog.get(&id), catalog.get_str(tool_ids::CHANGE_TONE));
    }

    #[test]
    fn local_analysis_set_is_exactly_two_tools() {
        let catalog = standard_catalog();
        let local: Vec<_> = catalog
            .iter()
            .filter(|tool| tool.is_local_analysis())
            .map(|tool| tool.id().as_str())
            .collect();
        assert_eq!(
            local,
            vec![tool_ids::COUNT_ANALYZER, tool_ids::READABILITY_SCORE]
        );
    }

    #[test]
    fn selection_dependent_tools_declare_their_field() {
        use crate::selection::SelectionField;

        let catalog = standard_catalog();
        let field = |id: &str| catalog.get_str(id).and_then(Tool::required_selection);

        assert_eq!(
            field(tool_ids::LANGUAGE_TRANSLATION),
            Some(SelectionField::TargetLanguage)
        );
        assert_eq!(field(tool_ids::CHANGE_TONE), Some(SelectionField::Tone));
        assert_eq!(
            field(tool_ids::MAKE_LONGER_SHORTER),
            Some(SelectionField::LengthDirection)
        );
        assert_eq!(field(tool_ids::CHANGE_VOICE), Some(SelectionField::Voice));
        assert_eq!(
            field(tool_ids::CHANGE_SPEECH),
            Some(SelectionField::SpeechForm)
        );
        assert_eq!(field(tool_ids::PROOFREADING), None);
    }

    #[test]
    fn category_filter_matches_registry() {
        let catalog = standard_catalog();
        assert_eq!(catalog.in_category(ToolCategory::Seo).count(), 3);
        assert_eq!(
            catalog.in_category(ToolCategory::ContentAnalysis).count(),
            2
        );
    }
}
