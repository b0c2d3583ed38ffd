//! Phrase and word substitution.

use std::{fmt, path::Path};

use serde::Serialize;

use crate::{
    dictionary::{self, Dictionary},
    record::{self, LoadError},
    tokenize::{self, Tokenize},
};

/// Tokenizer used unless another one is supplied.
pub type DefaultTokenizer = fn(&str) -> Vec<String>;

/// Replaces phrases and words with emoji.
pub struct Emojifier<T = DefaultTokenizer> {
    dictionary: Dictionary,
    tokenizer: T,
}

/// A single token and the glyph it was replaced with, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment<'d> {
    /// The token as produced by the tokenizer.
    pub token: String,
    /// Glyph bound to the lowercased token.
    pub glyph: Option<&'d str>,
}

impl Fragment<'_> {
    /// The glyph if the token matched, otherwise the token itself.
    pub fn rendered(&self) -> &str {
        self.glyph.unwrap_or(self.token.as_str())
    }
}

/// Result of converting a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Emojified<'d> {
    /// The whole normalized input is a dictionary key.
    Phrase {
        /// Tokens joined by single spaces.
        phrase: String,
        /// Glyph bound to the phrase.
        glyph: &'d str,
    },
    /// Tokens were looked up one by one.
    Words {
        /// One entry per token, in input order.
        fragments: Vec<Fragment<'d>>,
    },
}

impl fmt::Display for Emojified<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emojified::Phrase { glyph, .. } => f.write_str(glyph),
            Emojified::Words { fragments } => {
                let mut fragments = fragments.iter();
                if let Some(first) = fragments.next() {
                    f.write_str(first.rendered())?;
                }
                fragments.try_for_each(|fragment| write!(f, " {}", fragment.rendered()))
            }
        }
    }
}

impl Emojifier {
    /// Uses Penn Treebank tokenization.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_tokenizer(dictionary, tokenize::treebank)
    }

    /// Builds the dictionary from a JSON file of emoji records.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or contains malformed records.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let records = record::from_path(path)?;
        Ok(Self::new(dictionary::build(&records)))
    }

    /// Builds the dictionary from the data set embedded at compile time.
    ///
    /// # Errors
    ///
    /// Fails if the embedded data cannot be decoded.
    #[cfg(feature = "integrated")]
    pub fn new_with_integrated_dictionary() -> Result<Self, LoadError> {
        let records = crate::integrated_records()?;
        Ok(Self::new(dictionary::build(&records)))
    }
}

impl<T: Tokenize> Emojifier<T> {
    /// Uses a custom tokenizer.
    pub fn with_tokenizer(dictionary: Dictionary, tokenizer: T) -> Self {
        Self {
            dictionary,
            tokenizer,
        }
    }

    /// The dictionary lookups go through.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Looks up the whole normalized text first, then each token in
    /// lowercase. Tokens without a match are kept as they are.
    pub fn annotate(&self, text: &str) -> Emojified<'_> {
        lookup(self.tokenizer.tokenize(text), &self.dictionary)
    }

    /// Converts `text`, returning the substituted string.
    pub fn convert(&self, text: &str) -> String {
        self.annotate(text).to_string()
    }
}

fn lookup(tokens: Vec<String>, dictionary: &Dictionary) -> Emojified<'_> {
    let phrase = tokens.join(" ");

    if let Some(glyph) = dictionary.get(&phrase) {
        tracing::debug!(%phrase, glyph, "full phrase match");
        return Emojified::Phrase { phrase, glyph };
    }

    let fragments = tokens
        .into_iter()
        .map(|token| {
            let glyph = dictionary.get(&token.to_lowercase());
            Fragment { token, glyph }
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        tokens = fragments.len(),
        matched = fragments.iter().filter(|f| f.glyph.is_some()).count(),
        "word matches"
    );

    Emojified::Words { fragments }
}

/// Converts `text` against `dictionary` with Treebank tokenization.
pub fn convert(text: &str, dictionary: &Dictionary) -> String {
    lookup(tokenize::treebank(text), dictionary).to_string()
}
