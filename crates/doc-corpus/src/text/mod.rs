//! Text processing - word tokenization, stopwords, and sentence segmentation
//!
//! Scoring never looks at raw strings: every sentence and query is reduced
//! to a [`TokenSet`] first.

pub mod sentences;
pub mod stopwords;
pub mod tokenize;

pub use sentences::split_sentences;
pub use stopwords::Stopwords;
pub use tokenize::{tokenize_words, TokenSet};

/// Collapse every whitespace run to a single space and trim both ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
