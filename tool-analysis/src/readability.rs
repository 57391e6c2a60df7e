//! Flesch reading-ease scoring and recommendations.

use serde::Serialize;

use crate::stats::{ContentStats, count_sentences, count_syllables, count_words, round_to};

/// Band labels for the Flesch reading-ease scale.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ReadabilityLevel {
    /// Score 90–100.
    VeryEasy,
    /// Score 80–90.
    Easy,
    /// Score 70–80.
    FairlyEasy,
    /// Score 60–70.
    Standard,
    /// Score 50–60.
    FairlyDifficult,
    /// Score 30–50.
    Difficult,
    /// Score below 30.
    VeryDifficult,
}

impl ReadabilityLevel {
    /// Maps a Flesch score to its band.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 80.0 {
            Self::Easy
        } else if score >= 70.0 {
            Self::FairlyEasy
        } else if score >= 60.0 {
            Self::Standard
        } else if score >= 50.0 {
            Self::FairlyDifficult
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }

    /// Display label for the band.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::FairlyEasy => "Fairly Easy",
            Self::Standard => "Standard",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Difficult => "Difficult",
            Self::VeryDifficult => "Very Difficult",
        }
    }
}

/// Readability assessment for one piece of text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReadabilityReport {
    /// Underlying content statistics.
    pub stats: ContentStats,
    /// Flesch reading-ease score, clamped to 0–100.
    pub flesch_score: f64,
    /// Band the score falls into.
    pub level: ReadabilityLevel,
    /// Average words per sentence, one decimal.
    pub avg_words_per_sentence: f64,
    /// Average syllables per word, one decimal.
    pub avg_syllables_per_word: f64,
}

impl ReadabilityReport {
    /// Scores `text` for readability.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn analyze(text: &str) -> Self {
        let stats = ContentStats::analyze(text);
        let flesch_score = flesch_reading_ease(text);

        let avg_words_per_sentence = if stats.sentences > 0 {
            round_to(stats.words as f64 / stats.sentences as f64, 1)
        } else {
            0.0
        };
        let avg_syllables_per_word = if stats.words > 0 {
            round_to(stats.syllables as f64 / stats.words as f64, 1)
        } else {
            0.0
        };

        Self {
            level: ReadabilityLevel::from_score(flesch_score),
            stats,
            flesch_score,
            avg_words_per_sentence,
            avg_syllables_per_word,
        }
    }

    /// Writing advice derived from the score and averages.
    #[must_use]
    pub fn recommendations(&self) -> Vec<&'static str> {
        let mut items = Vec::new();

        if self.flesch_score >= 70.0 {
            items.push("✅ Your text is easy to read - great for general audiences!");
        } else {
            items.push("⚠️ Consider simplifying your text for better readability.");
        }

        if self.avg_words_per_sentence > 20.0 {
            items.push("📝 Try shortening some sentences to improve clarity.");
        } else if (15.0..=20.0).contains(&self.avg_words_per_sentence) {
            items.push("✅ Your sentence length is well-balanced for readability.");
        }

        if self.avg_syllables_per_word > 1.5 {
            items.push("🔤 Consider using simpler words to make content more accessible.");
        } else {
            items.push("✅ Your word complexity is appropriate for most readers.");
        }

        if self.flesch_score < 50.0 {
            items.push("📚 This text may be challenging for general audiences.");
        }

        items
    }
}

/// Flesch reading ease, clamped to 0–100 and rounded to one decimal.
/// Zero words or zero sentences score 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words = count_words(text);
    let sentences = count_sentences(text);
    let syllables = count_syllables(text);

    if words == 0 || sentences == 0 {
        return 0.0;
    }

    let score = 206.835
        - 1.015 * (words as f64 / sentences as f64)
        - 84.6 * (syllables as f64 / words as f64);
    round_to(score.clamp(0.0, 100.0), 1)
}
