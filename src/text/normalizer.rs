//! Text normalization applied before word segmentation for scoring.

use crate::config::TextConfig;
use unicode_normalization::UnicodeNormalization;

/// Text normalizer that applies case folding and Unicode composition.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: TextConfig,
}

impl Normalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Normalizes a whole text.
    pub fn normalize(&self, text: &str) -> String {
        let mut result = if self.config.unicode_normalize {
            text.nfc().collect()
        } else {
            text.to_string()
        };

        if self.config.lowercase {
            result = result.to_lowercase();
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let normalizer = Normalizer::default_config();
        assert_eq!(normalizer.normalize("Hello WORLD."), "hello world.");
    }

    #[test]
    fn test_lowercase_disabled() {
        let normalizer = Normalizer::new(TextConfig {
            lowercase: false,
            ..Default::default()
        });
        assert_eq!(normalizer.normalize("Hello"), "Hello");
    }

    #[test]
    fn test_unicode_composition() {
        let normalizer = Normalizer::new(TextConfig {
            unicode_normalize: true,
            ..Default::default()
        });
        // "cafe" + combining acute accent composes to the precomposed form
        assert_eq!(normalizer.normalize("Cafe\u{301}"), "caf\u{e9}");
    }

    #[test]
    fn test_punctuation_untouched() {
        let normalizer = Normalizer::default_config();
        assert_eq!(normalizer.normalize("(A), [B]!"), "(a), [b]!");
    }
}
