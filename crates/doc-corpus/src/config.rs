//! Configuration management for the documentation assistant

use crate::search::MatchMode;
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

pub const DEFAULT_PDF_DIR: &str = "knowledge_base/pdfs";
pub const DEFAULT_SPECS_PATH: &str = "specifications.json";
pub const DEFAULT_TOP_K: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    /// Directory scanned for PDF documents
    pub pdf_dir: PathBuf,
    /// JSON file holding the specification table
    pub specs_path: PathBuf,
    /// Number of ranked sentences in a free-text answer
    pub top_k: usize,
    pub match_mode: MatchMode,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            pdf_dir: PathBuf::from(DEFAULT_PDF_DIR),
            specs_path: PathBuf::from(DEFAULT_SPECS_PATH),
            top_k: DEFAULT_TOP_K,
            match_mode: MatchMode::default(),
        }
    }
}

impl AssistantConfig {
    pub fn with_pdf_dir(mut self, pdf_dir: impl Into<PathBuf>) -> Self {
        self.pdf_dir = pdf_dir.into();
        self
    }

    pub fn with_specs_path(mut self, specs_path: impl Into<PathBuf>) -> Self {
        self.specs_path = specs_path.into();
        self
    }

    /// Values below 1 are raised to 1
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// Load configuration from environment variables
    ///
    /// Expected variables (all optional):
    /// - ASSISTANT_PDF_DIR: Directory of PDF documents (default: "knowledge_base/pdfs")
    /// - ASSISTANT_SPECS_PATH: Specification JSON file (default: "specifications.json")
    /// - ASSISTANT_TOP_K: Sentences per answer, at least 1 (default: 2)
    /// - ASSISTANT_MATCH_MODE: "exact" or "stem" (default: "stem")
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("ASSISTANT_PDF_DIR") {
            config.pdf_dir = PathBuf::from(dir);
        }

        if let Some(path) = lookup("ASSISTANT_SPECS_PATH") {
            config.specs_path = PathBuf::from(path);
        }

        if let Some(top_k) = lookup("ASSISTANT_TOP_K") {
            let top_k: usize = top_k
                .trim()
                .parse()
                .with_context(|| format!("Invalid ASSISTANT_TOP_K: {}", top_k))?;
            if top_k == 0 {
                return Err(anyhow!("ASSISTANT_TOP_K must be at least 1"));
            }
            config.top_k = top_k;
        }

        if let Some(mode) = lookup("ASSISTANT_MATCH_MODE") {
            config.match_mode = mode.parse()?;
        }

        Ok(config)
    }
}
