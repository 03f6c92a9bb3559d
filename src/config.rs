//! Configuration for the gist summarization engine.

use crate::error::{GistError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration for the gist engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text processing configuration.
    pub text: TextConfig,

    /// Summary length configuration.
    pub summary: SummaryConfig,

    /// Linguistic resource configuration.
    pub resources: ResourceConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            GistError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for inconsistent values.
    pub fn validate(&self) -> Result<()> {
        if self.summary.default_sentences == 0 {
            return Err(GistError::Config(
                "summary.default_sentences must be at least 1".to_string(),
            ));
        }
        if self.summary.default_sentences > self.summary.max_sentences {
            return Err(GistError::Config(format!(
                "summary.default_sentences ({}) exceeds summary.max_sentences ({})",
                self.summary.default_sentences, self.summary.max_sentences
            )));
        }
        Ok(())
    }
}

/// Text processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Lower-case text before word segmentation for scoring.
    /// Default: true.
    pub lowercase: bool,

    /// Apply Unicode normalization (NFC) before word segmentation for scoring.
    /// Default: false.
    pub unicode_normalize: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            unicode_normalize: false,
        }
    }
}

/// Summary length configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Number of sentences requested when the caller gives none.
    /// Default: 3.
    pub default_sentences: usize,

    /// Upper bound accepted for a requested sentence count.
    /// Default: 20.
    pub max_sentences: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            default_sentences: 3,
            max_sentences: 20,
        }
    }
}

/// Linguistic resource configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Language of the built-in stop-word list (ISO code or English name).
    /// Default: "en".
    pub language: String,

    /// Newline-separated stop-word file replacing the built-in list.
    /// Default: None.
    pub stopwords_path: Option<PathBuf>,

    /// Additional stop words merged into whichever list is loaded.
    /// Default: empty.
    pub extra_stopwords: Vec<String>,

    /// Newline-separated abbreviation file extending the built-in list.
    /// Default: None.
    pub abbreviations_path: Option<PathBuf>,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            stopwords_path: None,
            extra_stopwords: Vec::new(),
            abbreviations_path: None,
        }
    }
}
