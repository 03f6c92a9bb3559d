//! Descriptive counts for a document and its summary.

use crate::text::Tokenizer;
use serde::{Deserialize, Serialize};

/// Character, word and sentence counts before and after summarization.
///
/// Character counts are Unicode scalar values, not bytes. Word counts include
/// punctuation tokens and ignore stop-word exclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Characters in the input text.
    pub original_char_count: usize,
    /// Word tokens in the input text.
    pub original_word_count: usize,
    /// Sentences in the input text.
    pub original_sentence_count: usize,
    /// Characters in the summary text.
    pub summary_char_count: usize,
    /// Word tokens in the summary text.
    pub summary_word_count: usize,
    /// Distinct sentences selected for the summary.
    pub summary_sentence_count: usize,
}

impl Statistics {
    /// Check if every count is zero.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Percentage of words removed by summarization, 0 for an empty original.
    pub fn reduction_percentage(&self) -> f64 {
        if self.original_word_count == 0 {
            return 0.0;
        }
        100.0 - (self.summary_word_count as f64 / self.original_word_count as f64 * 100.0)
    }
}

/// Computes statistics from already-produced pipeline values.
///
/// The summary's word count comes from re-tokenizing `summary_text`.
pub fn compute_statistics<S: AsRef<str>>(
    tokenizer: &Tokenizer,
    original_text: &str,
    original_words: &[S],
    original_sentences: &[&str],
    summary_text: &str,
    summary_sentence_count: usize,
) -> Statistics {
    Statistics {
        original_char_count: original_text.chars().count(),
        original_word_count: original_words.len(),
        original_sentence_count: original_sentences.len(),
        summary_char_count: summary_text.chars().count(),
        summary_word_count: tokenizer.count_words(summary_text),
        summary_sentence_count,
    }
}
