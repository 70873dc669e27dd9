//! Overlap-weighted sentence ranking
//!
//! # Algorithm
//!
//! ```text
//! score(s) = overlap(s) * (overlap(s) / |query tokens|)
//! ```
//!
//! Sentences with zero overlap are not candidates. The quadratic weighting
//! favours sentences covering a larger share of the distinct query terms:
//! with two query tokens, a sentence matching both scores 2.0 while one
//! matching a single token scores 0.5. Equal scores keep corpus order.

use crate::corpus::{Corpus, SentenceRecord};
use crate::search::MatchMode;
use crate::text::{Stopwords, TokenSet};

/// A candidate sentence with its relevance score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence<'a> {
    pub score: f64,
    pub sentence: &'a SentenceRecord,
}

#[derive(Debug, Clone, Default)]
pub struct Ranker {
    stopwords: Stopwords,
    match_mode: MatchMode,
}

impl Ranker {
    pub fn new(stopwords: Stopwords, match_mode: MatchMode) -> Self {
        Self {
            stopwords,
            match_mode,
        }
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// Score every sentence sharing at least one token with the query
    ///
    /// Returned in descending score order; ties keep corpus order.
    pub fn score<'a>(&self, query: &str, corpus: &'a Corpus) -> Vec<ScoredSentence<'a>> {
        let query_tokens = TokenSet::from_text(query, &self.stopwords);
        if query_tokens.is_empty() {
            tracing::debug!("Query has no content tokens: {:?}", query);
            return Vec::new();
        }

        let total = query_tokens.len() as f64;
        let mut scored: Vec<ScoredSentence<'a>> = corpus
            .iter()
            .filter_map(|sentence| {
                let sentence_tokens = TokenSet::from_text(sentence.as_str(), &self.stopwords);
                let overlap = self.match_mode.overlap(&query_tokens, &sentence_tokens);
                if overlap == 0 {
                    return None;
                }
                let overlap = overlap as f64;
                Some(ScoredSentence {
                    score: overlap * (overlap / total),
                    sentence,
                })
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(
            "Ranked {} of {} sentences for {} query tokens",
            scored.len(),
            corpus.len(),
            query_tokens.len()
        );
        scored
    }

    /// Sentences relevant to the query, most relevant first
    pub fn rank(&self, query: &str, corpus: &Corpus) -> Vec<String> {
        self.score(query, corpus)
            .into_iter()
            .map(|scored| scored.sentence.as_str().to_string())
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn sentence_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(
            "(alpha|beta|gamma|delta|the|is|port|ports|größe|größen|café|über)",
            1..8,
        )
            .prop_map(|words| format!("{}.", words.join(" ")))
    }

    proptest! {
        /// Property: ranking the same corpus twice gives identical output
        #[test]
        fn rank_is_idempotent(
            sentences in prop::collection::vec(sentence_strategy(), 0..12),
            query in "(alpha|beta|port|the|weight|größe)( (gamma|delta|is|café)){0,2}"
        ) {
            let corpus = Corpus::from_sentences(&sentences);
            for mode in [MatchMode::Exact, MatchMode::Stem] {
                let ranker = Ranker::default().with_match_mode(mode);
                prop_assert_eq!(ranker.rank(&query, &corpus), ranker.rank(&query, &corpus));
            }
        }

        /// Property: a sentence holding a query token verbatim is always returned
        #[test]
        fn verbatim_token_is_found(
            sentences in prop::collection::vec(sentence_strategy(), 0..12),
            token in "(alpha|beta|gamma|delta)"
        ) {
            let mut sentences = sentences;
            let needle = format!("Needle {} here.", token);
            sentences.push(needle.clone());
            let corpus = Corpus::from_sentences(&sentences);

            for mode in [MatchMode::Exact, MatchMode::Stem] {
                let ranked = Ranker::default().with_match_mode(mode).rank(&token, &corpus);
                prop_assert!(ranked.contains(&needle));
            }
        }

        /// Property: any lowercase Latin-1 word held verbatim is found in both modes
        #[test]
        fn accented_token_is_found(
            words in prop::collection::vec("[a-zà-öø-ÿ]{1,8}", 1..10),
            token in "[a-zà-öø-ÿ]{1,8}"
        ) {
            prop_assume!(!Stopwords::english().contains(&token));
            let mut sentences: Vec<String> = words.iter().map(|w| format!("{} {}.", w, w)).collect();
            let needle = format!("Needle {} here.", token);
            sentences.push(needle.clone());
            let corpus = Corpus::from_sentences(&sentences);

            for mode in [MatchMode::Exact, MatchMode::Stem] {
                let ranked = Ranker::default().with_match_mode(mode).rank(&token, &corpus);
                prop_assert!(ranked.contains(&needle));
            }
        }

        /// Property: scores are non-increasing and bounded by the overlap ceiling
        #[test]
        fn scores_descend(
            sentences in prop::collection::vec(sentence_strategy(), 0..12),
            query in "(alpha|beta|gamma)( (delta|port)){0,2}"
        ) {
            let corpus = Corpus::from_sentences(&sentences);
            let scored = Ranker::default().score(&query, &corpus);
            for pair in scored.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
            }
            for s in &scored {
                prop_assert!(s.score > 0.0);
            }
        }

        /// Property: a sentence covering strictly more query tokens ranks first
        #[test]
        fn fuller_coverage_ranks_first(
            sentences in prop::collection::vec("(alpha|gamma|port) (filler|words)\\.", 0..10)
        ) {
            let mut sentences = sentences;
            sentences.push("Alpha beta gamma together.".to_string());
            let corpus = Corpus::from_sentences(&sentences);

            let ranked = Ranker::default()
                .with_match_mode(MatchMode::Exact)
                .rank("alpha beta gamma", &corpus);
            prop_assert_eq!(ranked[0].as_str(), "Alpha beta gamma together.");
        }
    }
}
