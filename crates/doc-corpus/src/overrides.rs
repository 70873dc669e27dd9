//! Fixed query phrasings answered straight from the specification table

/// A canonical query key and the specification entry it maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOverride {
    pub key: &'static str,
    pub category: &'static str,
    pub attribute: &'static str,
}

pub const QUERY_OVERRIDES: &[QueryOverride] = &[
    QueryOverride {
        key: "weight",
        category: "physical",
        attribute: "weight",
    },
    QueryOverride {
        key: "dimensions",
        category: "physical",
        attribute: "dimensions",
    },
    QueryOverride {
        key: "power",
        category: "power",
        attribute: "input_voltage",
    },
    QueryOverride {
        key: "temperature",
        category: "environmental",
        attribute: "operating_temperature",
    },
];

const PHRASE_PREFIXES: &[&str] = &["", "what is the ", "what's the "];

impl QueryOverride {
    /// Exact match of a lowercased, trimmed query against the accepted phrasings
    pub fn matches(&self, normalized_query: &str) -> bool {
        PHRASE_PREFIXES
            .iter()
            .any(|prefix| normalized_query.strip_prefix(prefix) == Some(self.key))
    }
}

/// Overrides triggered by the query, in table order
pub fn matching_overrides(normalized_query: &str) -> impl Iterator<Item = &'static QueryOverride> + '_ {
    QUERY_OVERRIDES
        .iter()
        .filter(move |entry| entry.matches(normalized_query))
}
