//! Word frequency accounting.

use crate::resources::ExclusionSet;
use rustc_hash::FxHashMap;

/// Occurrence counts of normalized words, scoped to one summarization call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: FxHashMap<String, usize>,
}

impl WordFrequencies {
    /// Count for `word`, 0 if it was never counted.
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Check if `word` was counted.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct counted words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates over `(word, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

/// Counts every word that is not excluded.
///
/// Counts are exact occurrence totals; no weighting is applied.
pub fn compute_frequencies<S: AsRef<str>>(words: &[S], exclusions: &ExclusionSet) -> WordFrequencies {
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();

    for word in words {
        let word = word.as_ref();
        if exclusions.contains(word) {
            continue;
        }
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }

    WordFrequencies { counts }
}
