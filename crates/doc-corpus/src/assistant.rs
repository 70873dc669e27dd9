//! Answer dispatch: fixed-phrase specification lookups, else ranked search
//!
//! There is no session state. Each call normalizes the query, checks the
//! override table against the specification data, and otherwise returns
//! the top ranked corpus sentences.

use crate::config::{AssistantConfig, DEFAULT_TOP_K};
use crate::corpus::Corpus;
use crate::loader::{CorpusLoader, LoadStats};
use crate::overrides::matching_overrides;
use crate::search::Ranker;
use crate::specs::{is_present, render_value, ConfigLoadError, SpecificationTable};
use serde::Serialize;
use std::fmt;

pub const NOT_FOUND_MESSAGE: &str = "I couldn't find that information in the documentation.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Answer {
    /// Answered from the specification table
    Specification { key: String, value: String },
    /// Most relevant corpus sentences, best first
    Passages { sentences: Vec<String> },
    NotFound,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Specification { key, value } => write!(f, "The {} is {}.", key, value),
            Answer::Passages { sentences } => f.write_str(&sentences.join("\n")),
            Answer::NotFound => f.write_str(NOT_FOUND_MESSAGE),
        }
    }
}

/// What happened while assembling an assistant from its configuration
#[derive(Debug)]
pub struct StartupReport {
    pub load: LoadStats,
    pub sentences: usize,
    /// Set when the specification table could not be loaded
    pub specs_error: Option<ConfigLoadError>,
}

#[derive(Debug, Clone)]
pub struct Assistant {
    corpus: Corpus,
    specs: SpecificationTable,
    ranker: Ranker,
    top_k: usize,
}

impl Assistant {
    pub fn new(corpus: Corpus, specs: SpecificationTable) -> Self {
        Self {
            corpus,
            specs,
            ranker: Ranker::default(),
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_ranker(mut self, ranker: Ranker) -> Self {
        self.ranker = ranker;
        self
    }

    /// Values below 1 are raised to 1
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    /// Load the corpus and specification table named by the configuration
    ///
    /// Never fails: unreadable documents and a missing specification file
    /// are reported in the [`StartupReport`] and degrade the answers.
    pub fn from_config(config: &AssistantConfig) -> (Self, StartupReport) {
        Self::from_config_with_loader(config, &CorpusLoader::new())
    }

    pub fn from_config_with_loader(
        config: &AssistantConfig,
        loader: &CorpusLoader,
    ) -> (Self, StartupReport) {
        let report = loader.load(&config.pdf_dir);
        let (specs, specs_error) = SpecificationTable::load_or_empty(&config.specs_path);

        let startup = StartupReport {
            load: report.stats,
            sentences: report.corpus.len(),
            specs_error,
        };
        let assistant = Self::new(report.corpus, specs)
            .with_ranker(Ranker::default().with_match_mode(config.match_mode))
            .with_top_k(config.top_k);

        (assistant, startup)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn answer(&self, query: &str) -> Answer {
        let query = query.trim().to_lowercase();

        for entry in matching_overrides(&query) {
            if let Some(value) = self
                .specs
                .get(entry.category, entry.attribute)
                .filter(|v| is_present(v))
            {
                tracing::debug!("Answering {:?} from specification {}", query, entry.key);
                return Answer::Specification {
                    key: entry.key.to_string(),
                    value: render_value(value),
                };
            }
        }

        let mut sentences = self.ranker.rank(&query, &self.corpus);
        if sentences.is_empty() {
            return Answer::NotFound;
        }
        sentences.truncate(self.top_k);
        Answer::Passages { sentences }
    }

    pub fn get_answer(&self, query: &str) -> String {
        self.answer(query).to_string()
    }
}
