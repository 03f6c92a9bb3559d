//! Linguistic resources and their one-time initialization.
//!
//! A [`ResourceProvider`] is constructed once per process and handed to
//! every summarizer. Loading happens on the first [`ResourceProvider::ensure_ready`]
//! call; concurrent first calls share one load, later calls are no-ops, and a
//! failed load leaves the provider empty so the next request can retry.

pub mod abbreviations;
mod language;
pub mod stopwords;

pub use language::Language;
pub use stopwords::{build_exclusion_set, builtin_stopwords, ExclusionSet, PUNCTUATION};

use crate::config::ResourceConfig;
use crate::error::{GistError, Result};
use crate::text::SentenceSegmenter;
use abbreviations::ENGLISH_ABBREVIATIONS;
use log::{debug, info};
use once_cell::sync::OnceCell;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Loaded stop words and abbreviations.
///
/// Immutable once built, so it can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct LinguisticResources {
    language: Language,
    exclusions: ExclusionSet,
    abbreviations: Vec<String>,
}

impl LinguisticResources {
    /// Assembles resources from already-loaded parts.
    pub fn from_parts(
        language: Language,
        exclusions: ExclusionSet,
        abbreviations: Vec<String>,
    ) -> Self {
        Self {
            language,
            exclusions,
            abbreviations,
        }
    }

    /// Built-in resources for a language.
    pub fn builtin(language: Language) -> Self {
        Self::from_parts(
            language,
            build_exclusion_set(language),
            ENGLISH_ABBREVIATIONS.iter().map(|a| a.to_string()).collect(),
        )
    }

    /// Loads resources as described by the configuration.
    ///
    /// The abbreviation list is English-only whatever the language; other
    /// languages extend it through `abbreviations_path`.
    pub fn load(config: &ResourceConfig) -> Result<Self> {
        info!("Loading linguistic resources (language: {})", config.language);

        let language: Language = config.language.parse().map_err(|e: GistError| {
            let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
            GistError::resource_unavailable(
                e.to_string(),
                format!("Set resources.language to one of: {}", codes.join(", ")),
            )
        })?;

        let stopwords = match &config.stopwords_path {
            Some(path) => read_word_list(path).map_err(|e| {
                GistError::resource_unavailable(
                    format!("cannot read stop-word file {}: {}", path.display(), e),
                    "Create the file or remove resources.stopwords_path to use the built-in list",
                )
            })?,
            None => builtin_stopwords(language),
        };
        if stopwords.is_empty() {
            return Err(GistError::resource_unavailable(
                format!("no stop words available for language '{}'", language),
                "Provide a newline-separated list via resources.stopwords_path",
            ));
        }

        let mut exclusions = ExclusionSet::from_stopwords(stopwords);
        exclusions.extend(&config.extra_stopwords);

        let mut abbreviations: Vec<String> =
            ENGLISH_ABBREVIATIONS.iter().map(|a| a.to_string()).collect();
        if let Some(path) = &config.abbreviations_path {
            let extra = read_word_list(path).map_err(|e| {
                GistError::resource_unavailable(
                    format!("cannot read abbreviation file {}: {}", path.display(), e),
                    "Create the file or remove resources.abbreviations_path",
                )
            })?;
            abbreviations.extend(extra);
        }

        debug!(
            "Loaded {} exclusions and {} abbreviations",
            exclusions.len(),
            abbreviations.len()
        );

        Ok(Self::from_parts(language, exclusions, abbreviations))
    }

    /// The language the stop words belong to.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Tokens excluded from frequency accounting.
    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    /// Abbreviations known to the sentence segmenter.
    pub fn abbreviations(&self) -> &[String] {
        &self.abbreviations
    }

    /// Builds a sentence segmenter over these abbreviations.
    pub fn segmenter(&self) -> SentenceSegmenter {
        SentenceSegmenter::new(&self.abbreviations)
    }
}

/// Reads a newline-separated word list, skipping blank lines and `#` comments.
fn read_word_list(path: &Path) -> std::io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Loads linguistic resources at most once and hands out shared references.
#[derive(Debug)]
pub struct ResourceProvider {
    config: ResourceConfig,
    resources: OnceCell<Arc<LinguisticResources>>,
}

impl Default for ResourceProvider {
    fn default() -> Self {
        Self::new(ResourceConfig::default())
    }
}

impl ResourceProvider {
    /// Creates a provider. Nothing is loaded until [`Self::ensure_ready`].
    pub fn new(config: ResourceConfig) -> Self {
        Self {
            config,
            resources: OnceCell::new(),
        }
    }

    /// Creates a provider that is already initialized with `resources`,
    /// which were built from `config`.
    pub fn preloaded(config: ResourceConfig, resources: LinguisticResources) -> Self {
        Self {
            config,
            resources: OnceCell::with_value(Arc::new(resources)),
        }
    }

    /// Loads resources if needed and returns them.
    ///
    /// Safe to call concurrently. On failure nothing is cached and the error
    /// is returned to the caller.
    pub fn ensure_ready(&self) -> Result<Arc<LinguisticResources>> {
        self.resources
            .get_or_try_init(|| LinguisticResources::load(&self.config).map(Arc::new))
            .cloned()
    }

    /// Returns true once resources have been loaded.
    pub fn is_ready(&self) -> bool {
        self.resources.get().is_some()
    }

    /// The configuration resources are loaded from.
    pub fn config(&self) -> &ResourceConfig {
        &self.config
    }
}
