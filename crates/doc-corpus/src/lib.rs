//! Doc Corpus - Product documentation question answering
//!
//! This crate provides:
//! - Word tokenization, stopwords, and sentence segmentation
//! - Corpus loading from a directory of PDF documents
//! - Overlap-weighted sentence ranking
//! - Specification lookups for a fixed set of query phrasings
//! - The answer dispatch tying them together

pub mod assistant;
pub mod config;
pub mod corpus;
pub mod loader;
pub mod overrides;
pub mod search;
pub mod specs;
pub mod text;

// Re-export commonly used types
pub use assistant::{Answer, Assistant, StartupReport, NOT_FOUND_MESSAGE};
pub use config::AssistantConfig;
pub use corpus::{Corpus, SentenceRecord};
pub use loader::{CorpusLoader, DocumentParseError, LoadReport, LoadStats};
pub use overrides::{QueryOverride, QUERY_OVERRIDES};
pub use search::{MatchMode, Ranker, ScoredSentence};
pub use specs::{ConfigLoadError, SpecificationTable};
