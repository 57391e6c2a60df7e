//! Local analysis for the tools that never contact the remote processor.
//!
//! `count-analyzer` and `readability-score` compute their output from the
//! input text alone: word and sentence statistics, estimated reading and
//! speaking time, and a Flesch reading-ease assessment, rendered as an HTML
//! report for display.

#![warn(missing_docs, clippy::pedantic)]

mod readability;
mod report;
mod stats;

use tool_primitives::tool_ids;

/// Readability scoring types.
pub use readability::{ReadabilityLevel, ReadabilityReport};
/// HTML report rendering.
pub use report::{render_readability, render_stats};
/// Content statistics.
pub use stats::ContentStats;

/// Runs the local-analysis tool identified by `tool_id` over `text`.
///
/// Returns the rendered HTML report, or `None` when the identifier does not
/// belong to the local-analysis set; callers route those tools through the
/// remote pipeline instead.
#[must_use]
pub fn run(tool_id: &str, text: &str) -> Option<String> {
    match tool_id {
        tool_ids::COUNT_ANALYZER => Some(render_stats(&ContentStats::analyze(text))),
        tool_ids::READABILITY_SCORE => Some(render_readability(&ReadabilityReport::analyze(text))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_covers_the_local_analysis_set() {
        assert!(run("count-analyzer", "Some text.").is_some());
        assert!(run("readability-score", "Some text.").is_some());
        assert_eq!(run("proofreading", "Some text."), None);
        assert_eq!(run("mystery-tool", "Some text."), None);
    }

    #[test]
    fn reports_are_markup() {
        let report = run("count-analyzer", "Some text.").expect("report");
        assert!(report.contains("<div"));
    }
}
