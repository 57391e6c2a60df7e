//! Resolution of a tool identifier plus selections into an instruction.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::debug;

use tool_primitives::{SelectionBag, SelectionField, Tool, standard_catalog, tool_ids};

use crate::catalog::{GENERIC_INSTRUCTION, InstructionTemplate, template_for};
use crate::options::display_label;

const VOICE_FALLBACK: &str = "Please change the voice of the following text:";
const SPEECH_FALLBACK: &str = "Please change the speech of the following text:";

/// The natural-language directive prepended to user text before it is sent
/// to the remote processor.
///
/// An instruction never contains the input text itself; callers combine the
/// two with [`compose`](Instruction::compose) when a full prompt is needed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instruction(String);

impl Instruction {
    fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the instruction text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the instruction, returning the owned text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Joins the instruction and the input text with a separating blank line.
    #[must_use]
    pub fn compose(&self, input: &str) -> String {
        format!("{}\n\n{input}", self.0)
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves the instruction for `tool_id` under the current selections.
///
/// Returns `None` for local-analysis tools, which must never trigger a
/// remote call. Every other identifier resolves to an instruction: the
/// selection-dependent tools substitute the chosen option's display label,
/// tools with a fixed catalog entry return it, and unknown identifiers fall
/// back to [`GENERIC_INSTRUCTION`].
///
/// The function is pure: it reads only the selection field relevant to
/// `tool_id`, so stale values left over from another tool cannot leak into
/// the result.
#[must_use]
pub fn resolve(tool_id: &str, selections: &SelectionBag) -> Option<Instruction> {
    if standard_catalog()
        .get_str(tool_id)
        .is_some_and(Tool::is_local_analysis)
    {
        return None;
    }

    let instruction = match tool_id {
        tool_ids::LANGUAGE_TRANSLATION => {
            resolve_labeled(tool_id, selections, SelectionField::TargetLanguage, |label| {
                format!("Please translate the following text into {label}:")
            })
        }
        tool_ids::CHANGE_TONE => {
            resolve_labeled(tool_id, selections, SelectionField::Tone, |label| {
                format!("Please rewrite the following text using a {label} tone:")
            })
        }
        tool_ids::MAKE_LONGER_SHORTER => {
            resolve_labeled(tool_id, selections, SelectionField::LengthDirection, |label| {
                format!(
                    "Please {} the following text while maintaining its meaning and quality:",
                    label.to_lowercase()
                )
            })
        }
        tool_ids::CHANGE_VOICE => {
            resolve_variant(tool_id, selections, SelectionField::Voice, VOICE_FALLBACK)
        }
        tool_ids::CHANGE_SPEECH => {
            resolve_variant(tool_id, selections, SelectionField::SpeechForm, SPEECH_FALLBACK)
        }
        _ => match template_for(tool_id) {
            Some(InstructionTemplate::Fixed(text)) => Instruction::new(text),
            _ => {
                debug!(tool_id, "no catalog instruction, using generic fallback");
                Instruction::new(GENERIC_INSTRUCTION)
            }
        },
    };

    Some(instruction)
}

/// Selection-dependent tools that format the chosen option's label into a
/// sentence; an unset field falls back to the tool's fixed catalog entry.
fn resolve_labeled(
    tool_id: &str,
    selections: &SelectionBag,
    field: SelectionField,
    format: impl Fn(&str) -> String,
) -> Instruction {
    match selections.get(field) {
        Some(value) => Instruction::new(format(display_label(field, value))),
        None => fixed_or_generic(tool_id),
    }
}

/// Variant-keyed tools return the registered instruction verbatim; an unset
/// or unrecognized value falls back to the generic wording for the tool.
fn resolve_variant(
    tool_id: &str,
    selections: &SelectionBag,
    field: SelectionField,
    fallback: &'static str,
) -> Instruction {
    selections
        .get(field)
        .and_then(|value| template_for(tool_id)?.variant(value))
        .map_or_else(|| Instruction::new(fallback), Instruction::new)
}

fn fixed_or_generic(tool_id: &str) -> Instruction {
    match template_for(tool_id) {
        Some(InstructionTemplate::Fixed(text)) => Instruction::new(text),
        _ => Instruction::new(GENERIC_INSTRUCTION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_local_tools_always_resolve() {
        let selections = SelectionBag::new();
        for tool in standard_catalog().iter() {
            let resolved = resolve(tool.id().as_str(), &selections);
            assert_eq!(resolved.is_none(), tool.is_local_analysis(), "{}", tool.id());
        }
    }

    #[test]
    fn local_analysis_ignores_selections() {
        let selections = SelectionBag::new()
            .with_language("french")
            .with_tone("casual")
            .with_voice("active");
        assert_eq!(resolve("count-analyzer", &selections), None);
        assert_eq!(resolve("readability-score", &selections), None);
    }

    #[test]
    fn translation_substitutes_language_label() {
        let selections = SelectionBag::new().with_language("french");
        let instruction = resolve("language-translation", &selections).expect("instruction");
        assert_eq!(
            instruction.as_str(),
            "Please translate the following text into French:"
        );
    }

    #[test]
    fn translation_without_selection_uses_default() {
        let instruction =
            resolve("language-translation", &SelectionBag::new()).expect("instruction");
        assert_eq!(
            instruction.as_str(),
            "Please translate the following text into the selected language:"
        );
    }

    #[test]
    fn unknown_language_code_passes_through() {
        let selections = SelectionBag::new().with_language("esperanto");
        let instruction = resolve("language-translation", &selections).expect("instruction");
        assert_eq!(
            instruction.as_str(),
            "Please translate the following text into esperanto:"
        );
    }

    #[test]
    fn length_label_is_lowercased() {
        let selections = SelectionBag::new().with_length("longer");
        let instruction = resolve("make-longer-shorter", &selections).expect("instruction");
        assert_eq!(
            instruction.as_str(),
            "Please make longer the following text while maintaining its meaning and quality:"
        );
    }

    #[test]
    fn voice_variants_are_verbatim() {
        let active = resolve("change-voice", &SelectionBag::new().with_voice("active"))
            .expect("instruction");
        assert_eq!(
            active.as_str(),
            "Please rewrite the following text by converting all passive voice constructions to active voice. Make the subject perform the action directly:"
        );

        let passive = resolve("change-voice", &SelectionBag::new().with_voice("passive"))
            .expect("instruction");
        assert_eq!(
            passive.as_str(),
            "Please rewrite the following text by converting all active voice constructions to passive voice. Focus on the action being performed rather than who performs it:"
        );
    }

    #[test]
    fn unrecognized_voice_falls_back() {
        let unset = resolve("change-voice", &SelectionBag::new()).expect("instruction");
        assert_eq!(unset.as_str(), VOICE_FALLBACK);

        let unknown = resolve("change-voice", &SelectionBag::new().with_voice("falsetto"))
            .expect("instruction");
        assert_eq!(unknown.as_str(), VOICE_FALLBACK);
    }

    #[test]
    fn unknown_tool_gets_generic_instruction() {
        let instruction = resolve("mystery-tool", &SelectionBag::new()).expect("instruction");
        assert_eq!(instruction.as_str(), GENERIC_INSTRUCTION);
    }

    #[test]
    fn irrelevant_selections_do_not_leak() {
        let selections = SelectionBag::new().with_voice("active").with_tone("casual");
        let instruction = resolve("proofreading", &selections).expect("instruction");
        assert!(instruction.as_str().starts_with("Please proofread"));
    }

    #[test]
    fn resolution_is_idempotent() {
        let selections = SelectionBag::new().with_tone("professional");
        let first = resolve("change-tone", &selections);
        let second = resolve("change-tone", &selections);
        assert_eq!(first, second);
    }

    #[test]
    fn compose_separates_with_blank_line() {
        let instruction = resolve("proofreading", &SelectionBag::new()).expect("instruction");
        let composed = instruction.compose("Some text.");
        assert!(composed.ends_with("\n\nSome text."));
        assert!(!composed.contains("Some text.\n"));
    }
}
