//! Displayable result of one pipeline invocation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an opening-or-closing tag anywhere in the text. The heuristic is
/// deliberately loose: text such as `a<b>c` also classifies as markup, and
/// renderers depend on that exact behavior.
static MARKUP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)</?[a-z].*>").expect("markup pattern compiles"));

/// Returns `true` when `text` should be rendered as markup.
#[must_use]
pub fn looks_like_markup(text: &str) -> bool {
    MARKUP_PATTERN.is_match(text)
}

/// Rendering mode for result content.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContentFormat {
    /// Render as markup.
    Markup,
    /// Render as preformatted plain text.
    PlainText,
}

/// Result text together with its classified rendering mode.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedContent {
    text: String,
    format: ContentFormat,
}

impl RenderedContent {
    /// Classifies `text` and wraps it for rendering.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let format = if looks_like_markup(&text) {
            ContentFormat::Markup
        } else {
            ContentFormat::PlainText
        };
        Self { text, format }
    }

    /// The result text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Classified rendering mode.
    #[must_use]
    pub const fn format(&self) -> ContentFormat {
        self.format
    }

    /// Whether the content classified as markup.
    #[must_use]
    pub const fn is_markup(&self) -> bool {
        matches!(self.format, ContentFormat::Markup)
    }
}

/// Normalized result of one remote-processing request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The processor produced displayable content.
    Success(RenderedContent),
    /// The request failed; `message` names the underlying cause.
    Failure {
        /// Extracted cause, without display decoration.
        message: String,
    },
}

impl Outcome {
    /// Builds a success outcome, classifying the content on the way in.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(RenderedContent::new(text))
    }

    /// Builds a failure outcome carrying the underlying cause.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Whether this outcome is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the rendered content for success outcomes.
    #[must_use]
    pub const fn content(&self) -> Option<&RenderedContent> {
        match self {
            Self::Success(content) => Some(content),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the bare failure message, if this outcome is a failure.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { message } => Some(message),
        }
    }

    /// Text handed to the presentation layer: the content itself for
    /// successes, an explanatory error notice for failures.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Success(content) => content.text.clone(),
            Self::Failure { message } => format!(
                "**Error:**\n\nFailed to process your request: {message}\n\nPlease try again or check your connection."
            ),
        }
    }
}
