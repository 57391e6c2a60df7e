//! HTML report rendering for the local-analysis tools.
//!
//! The reports are structural markup only; the presentation layer styles
//! them. Rendering as HTML is what routes these results through the markup
//! branch of the content classifier downstream.

use std::fmt::Write;

use crate::readability::ReadabilityReport;
use crate::stats::ContentStats;

/// Renders the content-statistics report for the count analyzer.
#[must_use]
pub fn render_stats(stats: &ContentStats) -> String {
    let mut html = String::new();

    html.push_str(concat!(
        "<div class=\"analysis-results\">\n",
        "  <div class=\"header-section\">\n",
        "    <h3>Content Analysis Results</h3>\n",
        "    <p>Comprehensive statistics about your content</p>\n",
        "  </div>\n",
        "  <div class=\"stats-container\">\n",
    ));

    stat_card(&mut html, "featured", &group_thousands(stats.words), "Words", None);
    stat_card(
        &mut html,
        "featured",
        &group_thousands(stats.characters),
        "Characters",
        None,
    );
    stat_card(&mut html, "", &stats.sentences.to_string(), "Sentences", None);
    stat_card(&mut html, "", &stats.paragraphs.to_string(), "Paragraphs", None);
    stat_card(
        &mut html,
        "",
        &group_thousands(stats.syllables),
        "Syllables",
        None,
    );
    stat_card(
        &mut html,
        "time-card",
        &format!("{} min", fmt_decimal(stats.reading_time)),
        "Reading Time",
        Some("~200 words/min"),
    );
    stat_card(
        &mut html,
        "time-card",
        &format!("{} min", fmt_decimal(stats.speaking_time)),
        "Speaking Time",
        Some("~130 words/min"),
    );

    html.push_str("  </div>\n</div>");
    html
}

/// Renders the readability report for the readability scorer.
#[must_use]
pub fn render_readability(report: &ReadabilityReport) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"readability-results\">\n  <div class=\"score-hero\">\n");
    let _ = writeln!(
        html,
        "    <div class=\"score-circle\"><div class=\"score-number\">{}</div><div class=\"score-max\">/100</div></div>",
        fmt_decimal(report.flesch_score)
    );
    let _ = writeln!(
        html,
        "    <div class=\"score-info\"><h3>Flesch Reading Ease Score</h3><div class=\"score-level\">{}</div><div class=\"score-description\">Higher scores indicate easier readability</div></div>",
        report.level.label()
    );
    html.push_str("  </div>\n  <div class=\"detailed-analysis\">\n    <h4>📊 Detailed Analysis</h4>\n");

    stat_card(
        &mut html,
        "primary",
        &group_thousands(report.stats.words),
        "Total Words",
        None,
    );
    stat_card(
        &mut html,
        "primary",
        &report.stats.sentences.to_string(),
        "Sentences",
        None,
    );
    stat_card(
        &mut html,
        "",
        &fmt_decimal(report.avg_words_per_sentence),
        "Avg Words/Sentence",
        None,
    );
    stat_card(
        &mut html,
        "",
        &fmt_decimal(report.avg_syllables_per_word),
        "Avg Syllables/Word",
        None,
    );
    stat_card(
        &mut html,
        "time",
        &format!("{} min", fmt_decimal(report.stats.reading_time)),
        "Reading Time",
        None,
    );
    stat_card(
        &mut html,
        "time",
        &format!("{} min", fmt_decimal(report.stats.speaking_time)),
        "Speaking Time",
        None,
    );

    html.push_str(
        "  </div>\n  <div class=\"recommendations-section\">\n    <h4>💡 Recommendations</h4>\n",
    );
    for item in report.recommendations() {
        let _ = writeln!(html, "    <div class=\"recommendation-item\">{item}</div>");
    }
    html.push_str("  </div>\n</div>");

    html
}

fn stat_card(html: &mut String, modifier: &str, value: &str, label: &str, note: Option<&str>) {
    let class = if modifier.is_empty() {
        "stat-card".to_owned()
    } else {
        format!("stat-card {modifier}")
    };
    let note = note.map_or(String::new(), |note| {
        format!("<div class=\"stat-note\">{note}</div>")
    });
    let _ = writeln!(
        html,
        "    <div class=\"{class}\"><div class=\"stat-value\">{value}</div><div class=\"stat-label\">{label}</div>{note}</div>"
    );
}

/// Formats a rounded metric with its minimal digits but never without a
/// decimal point: whole numbers render as `2.0`, not `2`.
fn fmt_decimal(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        rendered
    } else {
        format!("{rendered}.0")
    }
}

/// Formats an integer with `,` thousands separators.
fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn decimals_keep_a_trailing_digit() {
        assert_eq!(fmt_decimal(0.0), "0.0");
        assert_eq!(fmt_decimal(2.0), "2.0");
        assert_eq!(fmt_decimal(100.0), "100.0");
        assert_eq!(fmt_decimal(0.5), "0.5");
        assert_eq!(fmt_decimal(3.08), "3.08");
    }

    #[test]
    fn stats_report_contains_every_metric() {
        let stats = ContentStats::analyze("One two three. Four five.\n\nSecond paragraph.");
        let html = render_stats(&stats);

        assert!(html.contains("Content Analysis Results"));
        for label in [
            "Words",
            "Characters",
            "Sentences",
            "Paragraphs",
            "Syllables",
            "Reading Time",
            "Speaking Time",
        ] {
            assert!(html.contains(label), "{label}");
        }
        assert!(html.contains("~200 words/min"));
    }

    #[test]
    fn readability_report_shows_score_and_level() {
        let report = ReadabilityReport::analyze("The cat sat on mats.");
        let html = render_readability(&report);

        assert!(html.contains("Flesch Reading Ease Score"));
        assert!(html.contains(report.level.label()));
        assert!(html.contains("recommendation-item"));
    }

    #[test]
    fn whole_number_score_renders_with_decimal() {
        // Clamps to exactly 100, which must render as 100.0 not 100.
        let report = ReadabilityReport::analyze("The cat sat on mats.");
        assert!((report.flesch_score - 100.0).abs() < f64::EPSILON);

        let html = render_readability(&report);
        assert!(html.contains("<div class=\"score-number\">100.0</div>"));
    }

    #[test]
    fn round_minute_estimates_render_with_decimal() {
        let stats = ContentStats::analyze(&"word ".repeat(400));
        assert!((stats.reading_time - 2.0).abs() < f64::EPSILON);

        let html = render_stats(&stats);
        assert!(html.contains("2.0 min"));
        assert!(html.contains("3.08 min"));
    }
}
