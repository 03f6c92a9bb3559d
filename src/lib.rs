//! # Gist - Extractive Text Summarization
//!
//! Gist summarizes a body of text by selecting the sentences whose words are
//! most frequent across the document. No model is learned; the scores come
//! from plain word counts.
//!
//! ## Overview
//!
//! Each call is a single stateless pass:
//!
//! - text is split into sentences and lower-cased word tokens
//! - stop words and punctuation are left out of the word counts
//! - each sentence is scored by the mean count of its words
//! - the best sentences are joined back together in reading order
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gist::{Config, ResourceProvider, Summarizer};
//!
//! let config = Config::default();
//! let provider = ResourceProvider::new(config.resources.clone());
//! let summarizer = Summarizer::new(&provider, &config)?;
//!
//! let summary = summarizer.summarize("Some long text. With many sentences.", 1);
//! println!("{}", summary.text);
//! println!("{} -> {} words", summary.statistics.original_word_count,
//!     summary.statistics.summary_word_count);
//! # Ok::<(), gist::GistError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Normalization, word and sentence segmentation
//! - [`resources`] - Stop words, abbreviations and their one-time loading
//! - [`summarizer`] - Frequency scoring, ranking, selection and statistics
//! - [`extract`] - Plain text from PDF and Word documents
//! - [`config`] - Serializable configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod extract;
pub mod resources;
pub mod summarizer;
pub mod text;

// Re-export commonly used types
pub use config::{Config, ResourceConfig, SummaryConfig, TextConfig};
pub use error::{GistError, Result};
pub use extract::{extract_text, load_document, DocumentKind};
pub use resources::{ExclusionSet, Language, LinguisticResources, ResourceProvider};
pub use summarizer::{clamp_sentence_count, Statistics, Summarizer, Summary};
pub use text::{Normalizer, SentenceSegmenter, Tokenizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarizes `text` in one call, loading resources through `provider` if needed.
///
/// Resource failures are returned before any tokenization happens.
pub fn summarize(
    provider: &ResourceProvider,
    config: &Config,
    text: &str,
    num_sentences: usize,
) -> Result<Summary> {
    let summarizer = Summarizer::new(provider, config)?;
    Ok(summarizer.summarize(text, num_sentences))
}
