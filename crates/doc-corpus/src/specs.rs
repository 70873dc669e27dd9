//! Structured product specifications
//!
//! Loaded once from a JSON file shaped like
//!
//! ```json
//! { "specifications": { "physical": { "weight": "2.3kg" } } }
//! ```
//!
//! and consulted only by the fixed-phrase override path.

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the specification table
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to read specifications from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid specifications JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Specifications JSON has no top-level \"specifications\" object")]
    MissingSection,
}

/// Category -> attribute -> value, read-only after loading
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecificationTable {
    categories: BTreeMap<String, BTreeMap<String, Value>>,
}

impl SpecificationTable {
    /// An empty table: every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let root: Value = serde_json::from_str(&data).map_err(|source| ConfigLoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_value(&root)
    }

    /// Load, or log a warning and fall back to an empty table
    pub fn load_or_empty(path: &Path) -> (Self, Option<ConfigLoadError>) {
        match Self::load(path) {
            Ok(table) => {
                tracing::info!(
                    "Loaded {} specification categories from {}",
                    table.categories.len(),
                    path.display()
                );
                (table, None)
            }
            Err(e) => {
                tracing::warn!("Could not load specifications: {}", e);
                (Self::empty(), Some(e))
            }
        }
    }

    /// Build from a parsed document; non-object categories are ignored
    pub fn from_value(root: &Value) -> Result<Self, ConfigLoadError> {
        let section = root
            .get("specifications")
            .and_then(Value::as_object)
            .ok_or(ConfigLoadError::MissingSection)?;

        let categories = section
            .iter()
            .filter_map(|(category, attributes)| {
                let attributes = attributes.as_object()?;
                let attributes = attributes
                    .iter()
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect();
                Some((category.clone(), attributes))
            })
            .collect();

        Ok(Self { categories })
    }

    pub fn get(&self, category: &str, attribute: &str) -> Option<&Value> {
        self.categories.get(category)?.get(attribute)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Whether a value carries an answer; null, false, zero and empty values do not
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Render a value for an answer sentence: strings verbatim, everything else as JSON
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
