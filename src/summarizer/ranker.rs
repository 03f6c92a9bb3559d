//! Sentence scoring.
//!
//! A sentence's score is the mean frequency of its words: every word of the
//! re-tokenized sentence counts toward the length, excluded words and
//! punctuation contribute 0 to the sum. Sentences with identical text share
//! one entry, kept at the position of their first occurrence.

use super::frequency::WordFrequencies;
use crate::text::Tokenizer;
use rustc_hash::FxHashMap;

/// A distinct sentence and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence<'a> {
    /// The sentence text.
    pub text: &'a str,
    /// Index of the first occurrence in the document's sentence sequence.
    pub position: usize,
    /// Mean word frequency.
    pub score: f64,
}

/// Scores keyed by sentence text, in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct SentenceScores<'a> {
    entries: Vec<ScoredSentence<'a>>,
    index: FxHashMap<&'a str, usize>,
}

impl<'a> SentenceScores<'a> {
    /// Score of a sentence, if it was scored.
    pub fn get(&self, text: &str) -> Option<f64> {
        self.index.get(text).map(|&i| self.entries[i].score)
    }

    /// Number of distinct sentences.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no sentence was scored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredSentence<'a>> {
        self.entries.iter()
    }

    /// Sentences by score, highest first. Ties keep document order.
    pub fn ranked(&self) -> Vec<ScoredSentence<'a>> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    fn insert(&mut self, text: &'a str, position: usize, score: f64) {
        if let Some(&i) = self.index.get(text) {
            self.entries[i].score = score;
            return;
        }
        self.index.insert(text, self.entries.len());
        self.entries.push(ScoredSentence {
            text,
            position,
            score,
        });
    }
}

/// Scores every sentence against the document's word frequencies.
pub fn score_sentences<'a>(
    tokenizer: &Tokenizer,
    sentences: &[&'a str],
    frequencies: &WordFrequencies,
) -> SentenceScores<'a> {
    let mut scores = SentenceScores::default();

    for (position, &sentence) in sentences.iter().enumerate() {
        let words = tokenizer.normalized_words(sentence);
        let score = if words.is_empty() {
            0.0
        } else {
            let total: usize = words.iter().map(|w| frequencies.get(w)).sum();
            total as f64 / words.len() as f64
        };
        scores.insert(sentence, position, score);
    }

    scores
}
