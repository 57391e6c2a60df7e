//! Content statistics computed locally from the input text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").expect("word pattern compiles"));

/// Runs of terminal punctuation followed by whitespace or end of input.
static SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(\s|$)").expect("sentence pattern compiles"));

/// Rough syllable estimate: runs of up to two vowels.
static SYLLABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[aeiouy]{1,2}").expect("syllable pattern compiles"));

const READING_WORDS_PER_MINUTE: f64 = 200.0;
const SPEAKING_WORDS_PER_MINUTE: f64 = 130.0;

/// Word, sentence, and timing statistics for one piece of text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContentStats {
    /// Number of words.
    pub words: usize,
    /// Number of sentences.
    pub sentences: usize,
    /// Number of non-whitespace characters.
    pub characters: usize,
    /// Number of non-empty paragraphs.
    pub paragraphs: usize,
    /// Estimated syllable count.
    pub syllables: usize,
    /// Estimated reading time in minutes (~200 words/min).
    pub reading_time: f64,
    /// Estimated speaking time in minutes (~130 words/min).
    pub speaking_time: f64,
}

impl ContentStats {
    /// Computes the statistics for `text`.
    #[must_use]
    pub fn analyze(text: &str) -> Self {
        let words = count_words(text);
        Self {
            words,
            sentences: count_sentences(text),
            characters: count_characters(text),
            paragraphs: count_paragraphs(text),
            syllables: count_syllables(text),
            reading_time: minutes(words, READING_WORDS_PER_MINUTE),
            speaking_time: minutes(words, SPEAKING_WORDS_PER_MINUTE),
        }
    }
}

pub(crate) fn count_words(text: &str) -> usize {
    WORD.find_iter(text).count()
}

pub(crate) fn count_sentences(text: &str) -> usize {
    let runs = SENTENCE.find_iter(text).count();
    if runs > 0 {
        runs
    } else {
        usize::from(!text.trim().is_empty())
    }
}

fn count_characters(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

fn count_paragraphs(text: &str) -> usize {
    text.trim()
        .split('\n')
        .filter(|paragraph| !paragraph.trim().is_empty())
        .count()
}

pub(crate) fn count_syllables(text: &str) -> usize {
    SYLLABLE.find_iter(&text.to_lowercase()).count()
}

#[allow(clippy::cast_precision_loss)]
fn minutes(words: usize, words_per_minute: f64) -> f64 {
    if words == 0 {
        return 0.0;
    }
    round_to(words as f64 / words_per_minute, 2)
}

/// Rounds to `decimals` decimal places.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.try_into().unwrap_or(i32::MAX));
    (value * factor).round() / factor
}
