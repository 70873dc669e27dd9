//! Token matching between a query and a sentence
//!
//! Overlap is always counted per distinct query token: a query token is
//! covered when the sentence holds a token matching it. Under
//! [`MatchMode::Exact`] this is exactly the size of the set intersection.
//! [`MatchMode::Stem`] additionally accepts inflected forms, so that a
//! query for "weight" covers a sentence saying "weighs".

use crate::text::TokenSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shortest stem allowed to match by prefix
const MIN_PREFIX_STEM: usize = 4;

/// Longest suffix a prefix match may leave over
const MAX_PREFIX_SLACK: usize = 2;

/// How a query token is compared against sentence tokens
///
/// `Exact` is plain set intersection of query and sentence tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Tokens must be identical
    Exact,
    /// Tokens match after light suffix stripping or as a close prefix
    #[default]
    Stem,
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("Unknown match mode: {0} (expected \"exact\" or \"stem\")")]
pub struct ParseMatchModeError(String);

impl FromStr for MatchMode {
    type Err = ParseMatchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(MatchMode::Exact),
            "stem" => Ok(MatchMode::Stem),
            _ => Err(ParseMatchModeError(s.to_string())),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Exact => f.write_str("exact"),
            MatchMode::Stem => f.write_str("stem"),
        }
    }
}

impl MatchMode {
    /// Number of distinct query tokens covered by the sentence
    pub fn overlap(self, query: &TokenSet, sentence: &TokenSet) -> usize {
        query
            .iter()
            .filter(|q| match self {
                MatchMode::Exact => sentence.contains(q),
                MatchMode::Stem => {
                    sentence.contains(q) || sentence.iter().any(|s| stems_match(q, s))
                }
            })
            .count()
    }
}

/// Strip plural and third-person endings
fn light_stem(token: &str) -> String {
    let len = token.len();
    if len > 4 && token.ends_with("ies") {
        return format!("{}y", &token[..len - 3]);
    }
    if len > 4 && ["sses", "xes", "zes", "ches", "shes"].iter().any(|s| token.ends_with(s)) {
        return token[..len - 2].to_string();
    }
    if len > 3 && token.ends_with('s') && !["ss", "us", "is"].iter().any(|s| token.ends_with(s)) {
        return token[..len - 1].to_string();
    }
    token.to_string()
}

fn stems_match(a: &str, b: &str) -> bool {
    let (a, b) = (light_stem(a), light_stem(b));
    if a == b {
        return true;
    }

    // Lengths in chars, not bytes
    let (a_chars, b_chars) = (a.chars().count(), b.chars().count());
    let (shorter, longer, slack) = if a_chars <= b_chars {
        (&a, &b, b_chars - a_chars)
    } else {
        (&b, &a, a_chars - b_chars)
    };
    let alphabetic = |s: &str| s.chars().all(char::is_alphabetic);

    alphabetic(shorter)
        && alphabetic(longer)
        && a_chars.min(b_chars) >= MIN_PREFIX_STEM
        && slack <= MAX_PREFIX_SLACK
        && longer.starts_with(shorter.as_str())
}
