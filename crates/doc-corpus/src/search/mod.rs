//! Search module - lexical overlap ranking of corpus sentences
//!
//! This module provides:
//! - Token matching modes (exact and light-stemmed)
//! - The overlap-weighted sentence ranker

pub mod matching;
pub mod ranker;

pub use matching::{MatchMode, ParseMatchModeError};
pub use ranker::{Ranker, ScoredSentence};
