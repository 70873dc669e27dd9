use crate::text::Stopwords;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    /// "don't" -> "do n't", "can't" -> "ca n't"
    static ref NEGATION: Regex = Regex::new(r"(\p{L})n't\b").unwrap();

    /// Clitics, then words (decimals and joined compounds kept whole), then punctuation runs
    static ref TOKEN: Regex = Regex::new(
        r"n't|'(?:s|re|ll|ve|d|m)\b|[\p{L}\p{N}]+(?:[.,:/\-][\p{L}\p{N}]+)*|[^\s\p{L}\p{N}]+"
    )
    .unwrap();
}

/// Lowercase and split text into word tokens, in order
///
/// ```
/// use doc_corpus::text::tokenize_words;
///
/// assert_eq!(
///     tokenize_words("What's the weight? 2.3kg."),
///     vec!["what", "'s", "the", "weight", "?", "2.3kg", "."]
/// );
/// ```
pub fn tokenize_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'");
    let split = NEGATION.replace_all(&lowered, "$1 n't");

    TOKEN
        .find_iter(&split)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn is_punctuation_only(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

/// Distinct content tokens of a string: stopwords and punctuation removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: BTreeSet<String>,
}

impl TokenSet {
    pub fn from_text(text: &str, stopwords: &Stopwords) -> Self {
        let tokens = tokenize_words(text)
            .into_iter()
            .filter(|t| !is_punctuation_only(t) && !stopwords.contains(t))
            .collect();
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}
