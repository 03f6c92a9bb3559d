//! Extractive summarization by word-frequency sentence scoring.
//!
//! The pipeline runs forward in one pass:
//!
//! 1. segment the text into sentences (original casing)
//! 2. lower-case and word-tokenize the whole text
//! 3. count words that are not stop words or punctuation
//! 4. score each sentence by the mean frequency of its words
//! 5. keep the N best sentences, restored to reading order
//! 6. report character, word and sentence counts

pub mod frequency;
pub mod ranker;
pub mod selector;
pub mod statistics;

pub use frequency::{compute_frequencies, WordFrequencies};
pub use ranker::{score_sentences, ScoredSentence, SentenceScores};
pub use selector::{select_summary, Selection, SENTENCE_SEPARATOR};
pub use statistics::{compute_statistics, Statistics};

use crate::config::Config;
use crate::error::Result;
use crate::resources::{LinguisticResources, ResourceProvider};
use crate::text::{SentenceSegmenter, Tokenizer};
use log::{debug, warn};
use serde::Serialize;
use std::sync::Arc;

/// The result of one summarization call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences joined by single spaces.
    pub text: String,
    /// Selected sentences in document order.
    pub sentences: Vec<String>,
    /// Counts for the document and the summary.
    pub statistics: Statistics,
}

impl Summary {
    /// Check if no sentence was selected.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Stateless summarizer over a set of loaded linguistic resources.
///
/// Every call is self-contained, so one summarizer can serve concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct Summarizer {
    resources: Arc<LinguisticResources>,
    tokenizer: Tokenizer,
    segmenter: SentenceSegmenter,
}

impl Summarizer {
    /// Creates a summarizer, loading resources through `provider` first.
    ///
    /// Fails with [`crate::GistError::ResourceUnavailable`] without building
    /// anything if the resources cannot be loaded.
    pub fn new(provider: &ResourceProvider, config: &Config) -> Result<Self> {
        let resources = provider.ensure_ready()?;
        Ok(Self::with_resources(resources, config))
    }

    /// Creates a summarizer over already-loaded resources.
    pub fn with_resources(resources: Arc<LinguisticResources>, config: &Config) -> Self {
        let segmenter = resources.segmenter();
        Self {
            resources,
            tokenizer: Tokenizer::new(config.text.clone()),
            segmenter,
        }
    }

    /// The word tokenizer in use.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// The sentence segmenter in use.
    pub fn segmenter(&self) -> &SentenceSegmenter {
        &self.segmenter
    }

    /// Segments `text` into sentences.
    pub fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.segmenter.segment(text)
    }

    /// Summarizes `text` into at most `num_sentences` distinct sentences.
    ///
    /// Text without sentences yields an empty summary with zeroed statistics.
    pub fn summarize(&self, text: &str, num_sentences: usize) -> Summary {
        let sentences = self.segmenter.segment(text);
        if sentences.is_empty() {
            warn!("No sentences found in input ({} bytes)", text.len());
            return Summary::default();
        }

        let words = self.tokenizer.normalized_words(text);
        let frequencies = compute_frequencies(&words, self.resources.exclusions());
        debug!(
            "{} sentences, {} words, {} distinct content words",
            sentences.len(),
            words.len(),
            frequencies.len()
        );

        let scores = score_sentences(&self.tokenizer, &sentences, &frequencies);
        let selection = select_summary(&sentences, &scores, num_sentences);
        let summary_text = selection.summary();
        debug!(
            "Selected {} of {} distinct sentences",
            selection.selected_count,
            scores.len()
        );

        let statistics = compute_statistics(
            &self.tokenizer,
            text,
            &words,
            &sentences,
            &summary_text,
            selection.selected_count,
        );

        Summary {
            text: summary_text,
            sentences: selection.sentences.iter().map(|s| s.to_string()).collect(),
            statistics,
        }
    }

    /// Scores every distinct sentence of `text`, best first.
    pub fn rank<'t>(&self, text: &'t str) -> Vec<ScoredSentence<'t>> {
        let sentences = self.segmenter.segment(text);
        let words = self.tokenizer.normalized_words(text);
        let frequencies = compute_frequencies(&words, self.resources.exclusions());
        score_sentences(&self.tokenizer, &sentences, &frequencies).ranked()
    }
}

/// Clamps a requested sentence count to what the document offers.
///
/// Returns 0 only when there are no sentences at all.
pub fn clamp_sentence_count(requested: usize, available: usize) -> usize {
    if available == 0 {
        return 0;
    }
    requested.clamp(1, available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{ExclusionSet, Language};

    fn summarizer() -> Summarizer {
        let resources = LinguisticResources::from_parts(
            Language::English,
            ExclusionSet::from_stopwords(["the", "a", "is", "of", "and", "it", "what"]),
            vec!["dr".to_string()],
        );
        Summarizer::with_resources(Arc::new(resources), &Config::default())
    }

    const TEXT: &str = "The borrow checker enforces ownership. \
        Lunch is at noon. \
        Ownership rules let the borrow checker prove memory safety. \
        It is what it is.";

    #[test]
    fn test_summarize_picks_frequent_sentences() {
        let summary = summarizer().summarize(TEXT, 2);

        assert_eq!(
            summary.sentences,
            vec![
                "The borrow checker enforces ownership.",
                "Ownership rules let the borrow checker prove memory safety.",
            ]
        );
        assert_eq!(summary.text, summary.sentences.join(" "));
        assert_eq!(summary.statistics.original_sentence_count, 4);
        assert_eq!(summary.statistics.summary_sentence_count, 2);
    }

    #[test]
    fn test_empty_input() {
        let summary = summarizer().summarize("", 3);
        assert!(summary.is_empty());
        assert_eq!(summary.text, "");
        assert!(summary.statistics.is_empty());
    }

    #[test]
    fn test_whitespace_input() {
        let summary = summarizer().summarize(" \n ", 1);
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_rank_orders_by_score() {
        let ranked = summarizer().rank(TEXT);
        assert_eq!(ranked.len(), 4);
        assert_eq!(ranked.last().unwrap().text, "It is what it is.");
        assert_eq!(ranked.last().unwrap().score, 0.0);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_clamp_sentence_count() {
        assert_eq!(clamp_sentence_count(5, 3), 3);
        assert_eq!(clamp_sentence_count(2, 3), 2);
        assert_eq!(clamp_sentence_count(0, 3), 1);
        assert_eq!(clamp_sentence_count(4, 0), 0);
    }
}
