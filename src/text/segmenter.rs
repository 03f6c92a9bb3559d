//! Rule-based sentence segmentation.
//!
//! Boundaries are detected on the original text, before any case folding.
//! A boundary candidate is a run of terminal punctuation, optionally followed
//! by closing quotes or brackets, that is followed by whitespace or the end of
//! the text. Period-like candidates are then checked against abbreviations,
//! initials and the casing of the following word.

use crate::resources::abbreviations::ENGLISH_ABBREVIATIONS;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

// Terminal punctuation plus any closing quotes or brackets glued to it
static CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?\x{2026}]+["'\x{201D}\x{2019})\]]*"#).unwrap()
});

/// Splits text into sentences.
///
/// Every returned sentence is a trimmed, contiguous slice of the input, in
/// document order.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    abbreviations: FxHashSet<String>,
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new(ENGLISH_ABBREVIATIONS.iter().map(|a| a.to_string()))
    }
}

impl SentenceSegmenter {
    /// Creates a segmenter that will not break after the given abbreviations.
    ///
    /// Abbreviations are matched case-insensitively and without their final
    /// period (`"dr"`, `"e.g"`).
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let abbreviations = abbreviations
            .into_iter()
            .map(|a| a.as_ref().trim().trim_end_matches('.').to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();
        Self { abbreviations }
    }

    /// Returns true if `word` is a known abbreviation.
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations
            .contains(&word.trim_end_matches('.').to_lowercase())
    }

    /// Segments text into sentences.
    ///
    /// Empty or whitespace-only text yields no sentences. Text without any
    /// terminal punctuation yields a single sentence.
    pub fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for candidate in CANDIDATE.find_iter(text) {
            let rest = &text[candidate.end()..];
            if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
                continue;
            }
            if !self.is_boundary(&text[..candidate.start()], candidate.as_str(), rest) {
                continue;
            }

            let sentence = text[start..candidate.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = candidate.end();
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }

        sentences
    }

    fn is_boundary(&self, before: &str, terminator: &str, after: &str) -> bool {
        // ! and ? always end a sentence
        if terminator.contains(['!', '?']) {
            return true;
        }

        let next = match after.trim_start().chars().next() {
            Some(c) => c,
            None => return true,
        };
        if next.is_lowercase() || next.is_ascii_digit() {
            return false;
        }

        let single_period = terminator.starts_with('.') && !terminator.starts_with("..");
        if !single_period {
            return true;
        }

        let word = before
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());

        if self.is_abbreviation(word) {
            return false;
        }

        // Single capital initial, as in "J. K. Rowling"
        let mut chars = word.chars();
        !matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
    }
}
