//! Walks through the local analysis engine on a file or a built-in sample.
//!
//! Usage: `content-analyzer [input-file]`

use anyhow::Result;
use tracing::info;

use tool_analysis::{ContentStats, ReadabilityReport};

const SAMPLE: &str = "Readable writing is a courtesy to the reader. Short sentences help. \
So does choosing plain words over ornate ones.\n\nA second paragraph keeps the \
paragraph counter honest.";

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            info!("no input file supplied, using the built-in sample");
            SAMPLE.to_owned()
        }
    };

    let stats = ContentStats::analyze(&text);
    info!(
        words = stats.words,
        sentences = stats.sentences,
        characters = stats.characters,
        paragraphs = stats.paragraphs,
        syllables = stats.syllables,
        "content statistics"
    );
    info!(
        reading_minutes = stats.reading_time,
        speaking_minutes = stats.speaking_time,
        "estimated pace"
    );

    let report = ReadabilityReport::analyze(&text);
    info!(
        flesch_score = report.flesch_score,
        level = report.level.label(),
        avg_words_per_sentence = report.avg_words_per_sentence,
        avg_syllables_per_word = report.avg_syllables_per_word,
        "readability"
    );

    for recommendation in report.recommendations() {
        println!("{recommendation}");
    }

    Ok(())
}
