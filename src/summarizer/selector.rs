//! Top-N sentence selection and order-preserving reassembly.

use super::ranker::SentenceScores;
use rustc_hash::FxHashSet;

/// Separator placed between selected sentences.
pub const SENTENCE_SEPARATOR: &str = " ";

/// Sentences chosen for a summary, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection<'a> {
    /// Selected sentences in reading order.
    ///
    /// A selected text that occurs more than once in the document appears at
    /// each of its positions.
    pub sentences: Vec<&'a str>,
    /// Number of distinct sentences chosen by score.
    pub selected_count: usize,
}

impl Selection<'_> {
    /// Joins the selected sentences into the summary text.
    pub fn summary(&self) -> String {
        self.sentences.join(SENTENCE_SEPARATOR)
    }

    /// Check if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Picks the `num_sentences` best-scoring sentences and restores their
/// original order.
///
/// Ties go to the sentence that appears first. `num_sentences` is expected to
/// be clamped by the caller; asking for more than exist selects them all.
pub fn select_summary<'a>(
    sentences: &[&'a str],
    scores: &SentenceScores<'a>,
    num_sentences: usize,
) -> Selection<'a> {
    if sentences.is_empty() || num_sentences == 0 {
        return Selection::default();
    }

    let chosen: FxHashSet<&str> = scores
        .ranked()
        .into_iter()
        .take(num_sentences)
        .map(|scored| scored.text)
        .collect();

    let ordered = sentences
        .iter()
        .copied()
        .filter(|sentence| chosen.contains(sentence))
        .collect();

    Selection {
        sentences: ordered,
        selected_count: chosen.len(),
    }
}
