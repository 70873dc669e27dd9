use crate::text::normalize_whitespace;
use std::fmt;

/// One whitespace-normalized, non-empty sentence of corpus text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SentenceRecord(String);

impl SentenceRecord {
    /// Normalize whitespace; `None` when nothing is left
    pub fn new(raw: &str) -> Option<Self> {
        let text = normalize_whitespace(raw);
        if text.is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SentenceRecord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SentenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, read-only sequence of sentences in discovery order
///
/// Duplicates are retained. Built once by the loader (or from plain
/// strings in tests and embeddings) and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    sentences: Vec<SentenceRecord>,
}

impl Corpus {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a corpus from raw sentence strings, dropping any that are blank
    pub fn from_sentences<I, S>(sentences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            sentences: sentences
                .into_iter()
                .filter_map(|s| SentenceRecord::new(s.as_ref()))
                .collect(),
        }
    }

    pub(crate) fn from_records(sentences: Vec<SentenceRecord>) -> Self {
        Self { sentences }
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SentenceRecord> {
        self.sentences.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SentenceRecord> {
        self.sentences.iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a SentenceRecord;
    type IntoIter = std::slice::Iter<'a, SentenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}
