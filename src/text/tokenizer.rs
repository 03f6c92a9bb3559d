//! Word segmentation.

use crate::config::TextConfig;
use crate::text::Normalizer;
use unicode_segmentation::UnicodeSegmentation;

/// Tokenizer that splits text on Unicode word boundaries.
///
/// Whitespace is discarded and every other boundary segment becomes a token,
/// so punctuation marks come out as tokens of their own.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    normalizer: Normalizer,
}

impl Tokenizer {
    /// Creates a new tokenizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config),
        }
    }

    /// Creates a tokenizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Splits text into word tokens without changing case.
    pub fn segment_words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split_word_bounds()
            .filter(|segment| !is_blank(segment))
            .collect()
    }

    /// Normalizes text, then splits it into word tokens.
    ///
    /// This is the form used for frequency accounting and sentence scoring.
    pub fn normalized_words(&self, text: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(text);
        self.segment_words(&normalized)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Counts the word tokens in a text.
    pub fn count_words(&self, text: &str) -> usize {
        text.split_word_bounds()
            .filter(|segment| !is_blank(segment))
            .count()
    }
}

fn is_blank(segment: &str) -> bool {
    segment.chars().all(char::is_whitespace)
}
