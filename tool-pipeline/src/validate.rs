//! Pre-flight validation for one generate action.

use tool_primitives::{SelectionBag, Tool};

use crate::error::{PipelineError, PipelineResult};

/// Validates input and selections before any network request is made.
///
/// The required-selection rule is read from the tool's own descriptor, so
/// this function and the presentation layer's option pickers stay in
/// agreement without repeating tool identifiers.
///
/// # Errors
///
/// Returns [`PipelineError::Validation`] when the input is empty after
/// trimming, or when the tool's required selection has not been made. The
/// error's message is the user-facing text.
pub fn validate(tool: &Tool, input: &str, selections: &SelectionBag) -> PipelineResult<()> {
    if input.trim().is_empty() {
        return Err(PipelineError::validation("No text provided."));
    }

    if let Some(field) = tool.required_selection() {
        if selections.get(field).is_none() {
            return Err(PipelineError::validation(field.picker_hint()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use tool_primitives::standard_catalog;

    use super::*;

    fn tool(id: &str) -> &'static Tool {
        standard_catalog().get_str(id).expect("tool")
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = validate(tool("proofreading"), "   \n", &SelectionBag::new())
            .expect_err("should fail");
        assert_eq!(err.to_string(), "No text provided.");
    }

    #[test]
    fn missing_selection_names_the_field() {
        let cases = [
            ("language-translation", "Please select a target language"),
            ("change-tone", "Please select a tone"),
            ("make-longer-shorter", "Please select length adjustment"),
            ("change-voice", "Please select a voice type"),
            ("change-speech", "Please select a speech type"),
        ];

        for (id, expected) in cases {
            let err =
                validate(tool(id), "some text", &SelectionBag::new()).expect_err("should fail");
            assert_eq!(err.to_string(), expected, "{id}");
        }
    }

    #[test]
    fn satisfied_selection_passes() {
        let selections = SelectionBag::new().with_voice("active");
        validate(tool("change-voice"), "some text", &selections).expect("valid");
    }

    #[test]
    fn tools_without_required_selection_pass() {
        validate(tool("proofreading"), "some text", &SelectionBag::new()).expect("valid");
        validate(tool("count-analyzer"), "some text", &SelectionBag::new()).expect("valid");
    }

    #[test]
    fn irrelevant_selection_does_not_satisfy_requirement() {
        let selections = SelectionBag::new().with_tone("casual");
        let err = validate(tool("change-voice"), "some text", &selections)
            .expect_err("should fail");
        assert_eq!(err.to_string(), "Please select a voice type");
    }
}
