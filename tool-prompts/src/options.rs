//! Value/label catalogs for the selection-dependent tools.

use tool_primitives::SelectionField;

/// One selectable value together with its display label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SelectionChoice {
    /// Stable machine value stored in the selection bag.
    pub value: &'static str,
    /// Label shown to the user and substituted into instructions.
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> SelectionChoice {
    SelectionChoice { value, label }
}

/// Target languages offered by the translation tool.
pub const LANGUAGES: &[SelectionChoice] = &[
    choice("spanish", "Spanish"),
    choice("french", "French"),
    choice("german", "German"),
    choice("italian", "Italian"),
    choice("portuguese", "Portuguese"),
    choice("chinese", "Chinese"),
    choice("japanese", "Japanese"),
    choice("korean", "Korean"),
    choice("arabic", "Arabic"),
    choice("hindi", "Hindi"),
];

/// Tones offered by the tone-change tool.
pub const TONES: &[SelectionChoice] = &[
    choice("professional", "Professional"),
    choice("friendly", "Friendly"),
    choice("casual", "Casual"),
    choice("straightforward", "Straight Forward"),
    choice("confident", "Confident"),
];

/// Voice options offered by the voice-change tool.
pub const VOICES: &[SelectionChoice] = &[
    choice("active", "Active Voice"),
    choice("passive", "Passive Voice"),
];

/// Speech forms offered by the speech-change tool.
pub const SPEECHES: &[SelectionChoice] = &[
    choice("direct", "Direct Speech"),
    choice("indirect", "Indirect Speech"),
];

/// Length directions offered by the length-adjustment tool.
pub const LENGTHS: &[SelectionChoice] = &[
    choice("longer", "Make Longer"),
    choice("shorter", "Make Shorter"),
];

/// Returns the choices presented for the supplied selection field.
#[must_use]
pub const fn choices_for(field: SelectionField) -> &'static [SelectionChoice] {
    match field {
        SelectionField::TargetLanguage => LANGUAGES,
        SelectionField::Tone => TONES,
        SelectionField::LengthDirection => LENGTHS,
        SelectionField::Voice => VOICES,
        SelectionField::SpeechForm => SPEECHES,
    }
}

/// Returns the display label for `value` within `field`'s choices.
///
/// Unknown values fall back to the raw value so a stale or external code
/// still produces a usable instruction.
#[must_use]
pub fn display_label<'a>(field: SelectionField, value: &'a str) -> &'a str {
    choices_for(field)
        .iter()
        .find(|option| option.value == value)
        .map_or(value, |option| option.label)
}
