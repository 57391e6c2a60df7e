//! The selection bag: auxiliary user-chosen parameters for a tool session.

use serde::{Deserialize, Serialize};

/// One of the optional choices a tool may require before it can run.
///
/// Exactly one field is relevant to any given tool; the descriptor lives on
/// [`Tool`](crate::Tool) so validation and presentation read the same data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionField {
    /// Target language for translation.
    TargetLanguage,
    /// Desired tone for tone rewriting.
    Tone,
    /// Whether to lengthen or shorten the text.
    LengthDirection,
    /// Active or passive voice.
    Voice,
    /// Direct or indirect speech form.
    SpeechForm,
}

impl SelectionField {
    /// User-facing message shown when the field is required but unset.
    #[must_use]
    pub const fn picker_hint(self) -> &'static str {
        match self {
            Self::TargetLanguage => "Please select a target language",
            Self::Tone => "Please select a tone",
            Self::LengthDirection => "Please select length adjustment",
            Self::Voice => "Please select a voice type",
            Self::SpeechForm => "Please select a speech type",
        }
    }
}

/// The set of optional choices accompanying one tool session.
///
/// Every field stays unset until the user picks a value. Fields scoped to
/// tools other than the active one are simply ignored by consumers, so stale
/// values cannot leak into resolution even if the caller forgets to
/// [`clear`](SelectionBag::clear) on tool change.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SelectionBag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    voice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    speech: Option<String>,
}

impl SelectionBag {
    /// Creates an empty bag with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target language code (e.g. `"french"`).
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the tone code (e.g. `"professional"`).
    #[must_use]
    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    /// Sets the length direction code (`"longer"` or `"shorter"`).
    #[must_use]
    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = Some(length.into());
        self
    }

    /// Sets the voice code (`"active"` or `"passive"`).
    #[must_use]
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    /// Sets the speech form code (`"direct"` or `"indirect"`).
    #[must_use]
    pub fn with_speech(mut self, speech: impl Into<String>) -> Self {
        self.speech = Some(speech.into());
        self
    }

    /// Returns the value chosen for the supplied field, if any.
    #[must_use]
    pub fn get(&self, field: SelectionField) -> Option<&str> {
        match field {
            SelectionField::TargetLanguage => self.language.as_deref(),
            SelectionField::Tone => self.tone.as_deref(),
            SelectionField::LengthDirection => self.length.as_deref(),
            SelectionField::Voice => self.voice.as_deref(),
            SelectionField::SpeechForm => self.speech.as_deref(),
        }
    }

    /// Resets every field. Callers invoke this when the active tool changes,
    /// since selections are meaningless across tools.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_start_unset() {
        let bag = SelectionBag::new();
        assert_eq!(bag.get(SelectionField::TargetLanguage), None);
        assert_eq!(bag.get(SelectionField::Voice), None);
    }

    #[test]
    fn get_reads_only_the_requested_field() {
        let bag = SelectionBag::new().with_tone("casual").with_voice("active");
        assert_eq!(bag.get(SelectionField::Tone), Some("casual"));
        assert_eq!(bag.get(SelectionField::Voice), Some("active"));
        assert_eq!(bag.get(SelectionField::SpeechForm), None);
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut bag = SelectionBag::new().with_language("french");
        bag.clear();
        assert_eq!(bag, SelectionBag::new());
    }

    #[test]
    fn serializes_only_set_fields() {
        let bag = SelectionBag::new().with_length("shorter");
        let json = serde_json::to_string(&bag).expect("serialize");
        assert_eq!(json, r#"{"length":"shorter"}"#);
    }
}
