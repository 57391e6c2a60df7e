//! The instruction template catalog.

use tool_primitives::tool_ids;

/// Fallback instruction for identifiers with no catalog entry.
pub const GENERIC_INSTRUCTION: &str = "Please process the following text:";

/// Template attached to a tool identifier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InstructionTemplate {
    /// A single fixed instruction string.
    Fixed(&'static str),
    /// Variant instructions keyed by a selection value.
    PerSelection(&'static [(&'static str, &'static str)]),
}

impl InstructionTemplate {
    /// Returns the variant instruction registered for `value`, if any.
    #[must_use]
    pub fn variant(&self, value: &str) -> Option<&'static str> {
        match self {
            Self::Fixed(_) => None,
            Self::PerSelection(variants) => variants
                .iter()
                .find(|(key, _)| *key == value)
                .map(|(_, instruction)| *instruction),
        }
    }
}

/// Looks up the instruction template for a tool identifier.
///
/// Local-analysis tools have no entry here; neither do unknown identifiers.
#[must_use]
pub fn template_for(tool_id: &str) -> Option<InstructionTemplate> {
    use InstructionTemplate::{Fixed, PerSelection};

    let template = match tool_id {
        tool_ids::PROOFREADING => Fixed(
            "Please proofread the following text and identify any spelling errors, grammatical mistakes, and style inconsistencies. Provide a corrected version with explanations for each change:",
        ),
        tool_ids::PARAPHRASING => Fixed(
            "Please paraphrase the following text while maintaining its original meaning but using different words and sentence structures:",
        ),
        tool_ids::AI_HUMANIZER => Fixed(
            "Please rewrite the following text to make it more engaging and human-like by adjusting tone, style, and readability:",
        ),
        tool_ids::AI_SUMMARIZER => Fixed(
            "Please provide a concise summary of the following text while retaining all key information:",
        ),
        tool_ids::OUTLINE_GENERATION => {
            Fixed("Please generate a structured outline for the following content or topic:")
        }
        tool_ids::SPLIT_SENTENCE => Fixed(
            "Please split the following long sentences into shorter, more readable ones to enhance clarity:",
        ),
        tool_ids::TABLE_GENERATOR => {
            Fixed("Please convert the following content into a well-organized table format:")
        }
        tool_ids::FAQ_GENERATOR => Fixed(
            "Please generate frequently asked questions (FAQs) based on the following content:",
        ),
        tool_ids::GLOSSARY_GENERATOR => Fixed(
            "Please generate a glossary of terms and definitions from the following content:",
        ),
        tool_ids::LANGUAGE_TRANSLATION => {
            Fixed("Please translate the following text into the selected language:")
        }
        tool_ids::WORD_CHOICE_OPTIMIZATION => Fixed(
            "Please optimize the word choices in the following text to enhance clarity, engagement, and overall quality:",
        ),
        tool_ids::CHANGE_TONE => Fixed(
            "Please change the tone of the following text according to the selected tone:",
        ),
        tool_ids::MAKE_LONGER_SHORTER => Fixed(
            "Please adjust the length of the following text according to the selected option:",
        ),
        tool_ids::CHANGE_VOICE => PerSelection(&[
            (
                "active",
                "Please rewrite the following text by converting all passive voice constructions to active voice. Make the subject perform the action directly:",
            ),
            (
                "passive",
                "Please rewrite the following text by converting all active voice constructions to passive voice. Focus on the action being performed rather than who performs it:",
            ),
        ]),
        tool_ids::CHANGE_SPEECH => PerSelection(&[
            (
                "direct",
                "Please rewrite the following text by converting all indirect/reported speech to direct speech using quotation marks and present tense dialogue:",
            ),
            (
                "indirect",
                "Please rewrite the following text by converting all direct speech to indirect/reported speech, removing quotation marks and using past tense reporting verbs:",
            ),
        ]),
        tool_ids::SEO_DESCRIPTION_GENERATOR => Fixed(
            "Please generate SEO-friendly meta descriptions for the following content:",
        ),
        tool_ids::TAG_RECOMMENDER => {
            Fixed("Please recommend relevant tags for the following content:")
        }
        tool_ids::TITLE_RECOMMENDER => Fixed(
            "Please recommend catchy and SEO-friendly titles for the following content:",
        ),
        _ => return None,
    };

    Some(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tool_primitives::standard_catalog;

    #[test]
    fn every_remote_tool_has_a_template() {
        for tool in standard_catalog().iter() {
            if tool.is_local_analysis() {
                assert_eq!(template_for(tool.id().as_str()), None);
            } else {
                assert!(template_for(tool.id().as_str()).is_some(), "{}", tool.id());
            }
        }
    }

    #[test]
    fn voice_template_has_both_variants() {
        let template = template_for("change-voice").expect("template");
        assert!(template.variant("active").is_some());
        assert!(template.variant("passive").is_some());
        assert_eq!(template.variant("falsetto"), None);
    }

    #[test]
    fn fixed_template_has_no_variants() {
        let template = template_for("proofreading").expect("template");
        assert_eq!(template.variant("active"), None);
    }

    #[test]
    fn unknown_id_has_no_entry() {
        assert_eq!(template_for("mystery-tool"), None);
    }
}
