//! Corpus loading from a directory of PDF documents
//!
//! Every `.pdf` file directly inside the directory is parsed page by page.
//! Pages yielding no text are skipped, the rest are whitespace-normalized
//! and split into sentences. A document that fails to parse is logged and
//! recorded in the [`LoadReport`]; it never aborts the load. A missing
//! directory yields an empty corpus.
//!
//! Documents are visited in directory enumeration order, which the file
//! system does not guarantee to be alphabetical. Sentence order within a
//! document follows page order.

use crate::corpus::{Corpus, SentenceRecord};
use crate::text::{normalize_whitespace, split_sentences};
use shared_pdf::{ExtractError, PageSource, PageText, PdfPageSource};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One document could not be opened or its text extracted
#[derive(Debug, Error)]
#[error("Failed to load {}: {source}", .path.display())]
pub struct DocumentParseError {
    pub path: PathBuf,
    #[source]
    pub source: ExtractError,
}

/// Outcome of a directory load, beyond the corpus itself
#[derive(Debug, Default)]
pub struct LoadStats {
    pub directory_found: bool,
    pub documents_loaded: usize,
    pub failures: Vec<DocumentParseError>,
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub corpus: Corpus,
    pub stats: LoadStats,
}

pub struct CorpusLoader {
    source: Box<dyn PageSource>,
}

impl CorpusLoader {
    /// Loader backed by the PDF page extractor
    pub fn new() -> Self {
        Self::with_source(PdfPageSource)
    }

    pub fn with_source(source: impl PageSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn load(&self, dir: &Path) -> LoadReport {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Document directory {} unavailable: {}", dir.display(), e);
                return LoadReport::default();
            }
        };

        tracing::debug!(
            "Scanning {} with the {} extractor",
            dir.display(),
            self.source.name()
        );
        let mut records = Vec::new();
        let mut stats = LoadStats {
            directory_found: true,
            ..LoadStats::default()
        };

        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            if !is_document(&path) {
                continue;
            }

            tracing::info!("Loading {}...", path.display());
            match self.load_document(&path) {
                Ok(sentences) => {
                    tracing::info!(
                        "Loaded {} sentences from {}",
                        sentences.len(),
                        path.display()
                    );
                    records.extend(sentences);
                    stats.documents_loaded += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping document: {}", e);
                    stats.failures.push(e);
                }
            }
        }

        LoadReport {
            corpus: Corpus::from_records(records),
            stats,
        }
    }

    /// Sentences of a single document, in page order
    pub fn load_document(&self, path: &Path) -> Result<Vec<SentenceRecord>, DocumentParseError> {
        let pages = self
            .source
            .extract_file(path)
            .map_err(|source| DocumentParseError {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(sentences_from_pages(&pages))
    }
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn is_document(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn sentences_from_pages(pages: &[PageText]) -> Vec<SentenceRecord> {
    pages
        .iter()
        .map(|page| normalize_whitespace(&page.text))
        .filter(|text| !text.is_empty())
        .flat_map(|text| split_sentences(&text))
        .filter_map(|sentence| SentenceRecord::new(&sentence))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// Serves pages keyed by file name; files without an entry fail to parse
    struct FakePages(HashMap<String, Vec<&'static str>>);

    impl PageSource for FakePages {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn extract_pages(&self, _data: &[u8]) -> Result<Vec<PageText>, ExtractError> {
            unreachable!("extract_file is overridden")
        }

        fn extract_file(&self, path: &Path) -> Result<Vec<PageText>, ExtractError> {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            let pages = self
                .0
                .get(&name)
                .ok_or_else(|| ExtractError::Parse("corrupt".to_string()))?;
            Ok(pages
                .iter()
                .enumerate()
                .map(|(i, text)| PageText {
                    page_number: i as u32 + 1,
                    text: text.to_string(),
                })
                .collect())
        }
    }

    fn fake(entries: &[(&str, Vec<&'static str>)]) -> CorpusLoader {
        CorpusLoader::with_source(FakePages(
            entries
                .iter()
                .map(|(name, pages)| (name.to_string(), pages.clone()))
                .collect(),
        ))
    }

    fn texts(corpus: &Corpus) -> Vec<&str> {
        corpus.iter().map(SentenceRecord::as_str).collect()
    }

    #[test]
    fn test_pages_become_sentences_in_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("manual.pdf"), b"").unwrap();

        let loader = fake(&[(
            "manual.pdf",
            vec![
                "Input   voltage is\n12V. Power draw is 5W.",
                "   \n ",
                "Operating temperature ranges widely.",
            ],
        )]);
        let report = loader.load(dir.path());

        assert_eq!(
            texts(&report.corpus),
            vec![
                "Input voltage is 12V.",
                "Power draw is 5W.",
                "Operating temperature ranges widely."
            ]
        );
        assert_eq!(report.stats.documents_loaded, 1);
        assert!(report.stats.failures.is_empty());
    }

    #[test]
    fn test_bad_document_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("good.pdf"), b"").unwrap();
        std::fs::write(dir.path().join("broken.pdf"), b"").unwrap();

        let loader = fake(&[("good.pdf", vec!["The unit is rugged."])]);
        let report = loader.load(dir.path());

        assert_eq!(texts(&report.corpus), vec!["The unit is rugged."]);
        assert_eq!(report.stats.documents_loaded, 1);
        assert_eq!(report.stats.failures.len(), 1);
        assert!(report.stats.failures[0].path.ends_with("broken.pdf"));
    }

    #[test]
    fn test_non_documents_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();
        std::fs::write(dir.path().join("README"), b"ignored").unwrap();
        std::fs::create_dir(dir.path().join("nested.pdf")).unwrap();
        std::fs::write(dir.path().join("UPPER.PDF"), b"").unwrap();

        let loader = fake(&[("UPPER.PDF", vec!["Found it."])]);
        let report = loader.load(dir.path());

        assert_eq!(texts(&report.corpus), vec!["Found it."]);
        assert!(report.stats.failures.is_empty());
    }

    #[test]
    fn test_missing_directory_yields_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let report = CorpusLoader::new().load(&dir.path().join("does-not-exist"));

        assert!(report.corpus.is_empty());
        assert!(!report.stats.directory_found);
        assert_eq!(report.stats.documents_loaded, 0);
    }

    #[test]
    fn test_empty_directory_yields_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let report = CorpusLoader::new().load(dir.path());

        assert!(report.corpus.is_empty());
        assert!(report.stats.directory_found);
    }

    #[test]
    fn test_real_extractor_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("garbage.pdf"), b"not a pdf at all").unwrap();
        std::fs::write(dir.path().join("empty.pdf"), b"").unwrap();

        let report = CorpusLoader::new().load(dir.path());

        assert!(report.corpus.is_empty());
        assert_eq!(report.stats.failures.len(), 2);
        assert!(report
            .stats
            .failures
            .iter()
            .any(|f| matches!(f.source, ExtractError::Empty)));
    }
}
