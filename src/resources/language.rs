//! Languages with a built-in stop-word list (the NLTK lists).

use crate::error::GistError;
use std::fmt;
use std::str::FromStr;
use stop_words::LANGUAGE;

/// A language the built-in stop-word lists cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// English.
    English,
    /// German.
    German,
    /// French.
    French,
    /// Spanish.
    Spanish,
    /// Italian.
    Italian,
    /// Portuguese.
    Portuguese,
    /// Dutch.
    Dutch,
    /// Russian.
    Russian,
    /// Swedish.
    Swedish,
    /// Norwegian.
    Norwegian,
    /// Danish.
    Danish,
    /// Finnish.
    Finnish,
    /// Hungarian.
    Hungarian,
    /// Turkish.
    Turkish,
    /// Arabic.
    Arabic,
}

impl Language {
    /// All supported languages.
    pub const ALL: &'static [Language] = &[
        Language::English,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Italian,
        Language::Portuguese,
        Language::Dutch,
        Language::Russian,
        Language::Swedish,
        Language::Norwegian,
        Language::Danish,
        Language::Finnish,
        Language::Hungarian,
        Language::Turkish,
        Language::Arabic,
    ];

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Dutch => "nl",
            Language::Russian => "ru",
            Language::Swedish => "sv",
            Language::Norwegian => "no",
            Language::Danish => "da",
            Language::Finnish => "fi",
            Language::Hungarian => "hu",
            Language::Turkish => "tr",
            Language::Arabic => "ar",
        }
    }

    /// English name, lower-case.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::German => "german",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::Dutch => "dutch",
            Language::Russian => "russian",
            Language::Swedish => "swedish",
            Language::Norwegian => "norwegian",
            Language::Danish => "danish",
            Language::Finnish => "finnish",
            Language::Hungarian => "hungarian",
            Language::Turkish => "turkish",
            Language::Arabic => "arabic",
        }
    }

    pub(crate) fn stop_words_language(&self) -> LANGUAGE {
        match self {
            Language::English => LANGUAGE::English,
            Language::German => LANGUAGE::German,
            Language::French => LANGUAGE::French,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Italian => LANGUAGE::Italian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Dutch => LANGUAGE::Dutch,
            Language::Russian => LANGUAGE::Russian,
            Language::Swedish => LANGUAGE::Swedish,
            Language::Norwegian => LANGUAGE::Norwegian,
            Language::Danish => LANGUAGE::Danish,
            Language::Finnish => LANGUAGE::Finnish,
            Language::Hungarian => LANGUAGE::Hungarian,
            Language::Turkish => LANGUAGE::Turkish,
            Language::Arabic => LANGUAGE::Arabic,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = GistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.code() == wanted || lang.name() == wanted)
            .ok_or_else(|| GistError::InvalidInput(format!("unsupported language '{}'", s)))
    }
}
