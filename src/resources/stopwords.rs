//! Stop-word exclusion sets.
//!
//! An exclusion set is a language's stop-word list unioned with a fixed set
//! of punctuation symbols. It only decides which tokens are left out of
//! frequency accounting; sentences themselves are never filtered.

use super::Language;
use rustc_hash::FxHashSet;

/// Punctuation symbols excluded from frequency accounting.
pub const PUNCTUATION: &[&str] = &[
    ".", ",", "!", "?", ";", ":", "\"", "'", "(", ")", "[", "]", "{", "}",
];

/// Tokens excluded from frequency accounting.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    words: FxHashSet<String>,
}

impl ExclusionSet {
    /// Creates a set from the given stop words plus [`PUNCTUATION`].
    ///
    /// Stop words are trimmed and lower-cased.
    pub fn from_stopwords<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::punctuation_only();
        set.extend(stopwords);
        set
    }

    /// Creates a set holding only [`PUNCTUATION`].
    pub fn punctuation_only() -> Self {
        Self {
            words: PUNCTUATION.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Adds more stop words.
    pub fn extend<I, S>(&mut self, stopwords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in stopwords {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase());
            }
        }
    }

    /// Check if a token is excluded.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of excluded tokens, punctuation included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Built-in stop words for a language: the NLTK list shipped by the
/// `stop-words` crate.
pub fn builtin_stopwords(language: Language) -> Vec<String> {
    stop_words::get(language.stop_words_language())
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Builds the exclusion set for a language: its stop words plus punctuation.
pub fn build_exclusion_set(language: Language) -> ExclusionSet {
    ExclusionSet::from_stopwords(builtin_stopwords(language))
}
