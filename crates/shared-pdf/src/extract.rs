//! Page-level PDF text extraction
//!
//! The primary path parses the document with lopdf and extracts each page
//! on its own, so one undecodable page does not cost the rest of the
//! document. When lopdf cannot produce text for any page, the whole
//! document is handed to pdf-extract and its output is split on form feeds.
//!
//! # Example
//! ```no_run
//! use shared_pdf::{PageSource, PdfPageSource};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), shared_pdf::ExtractError> {
//! let pages = PdfPageSource.extract_file(Path::new("manual.pdf"))?;
//! for page in &pages {
//!     println!("page {}: {} chars", page.page_number, page.text.len());
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::ExtractError;
use lopdf::Document;
use std::path::Path;

/// Raw text of a single page, 1-based page numbering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub page_number: u32,
    pub text: String,
}

/// A document parser yielding per-page raw text
pub trait PageSource: Send + Sync {
    /// Backend identifier
    fn name(&self) -> &'static str;

    /// Extract the text of every page, in page order
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<PageText>, ExtractError>;

    /// Read a file and extract its pages
    fn extract_file(&self, path: &Path) -> Result<Vec<PageText>, ExtractError> {
        let data = std::fs::read(path)?;
        self.extract_pages(&data)
    }
}

/// PDF backend: lopdf per page, pdf-extract as whole-document fallback
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfPageSource;

impl PageSource for PdfPageSource {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn extract_pages(&self, data: &[u8]) -> Result<Vec<PageText>, ExtractError> {
        if data.is_empty() {
            return Err(ExtractError::Empty);
        }
        if !has_pdf_header(data) {
            return Err(ExtractError::Parse("missing %PDF header".to_string()));
        }

        let doc = Document::load_mem(data).map_err(|e| classify_error(&e.to_string()))?;
        let page_count = doc.get_pages().len();
        let pages = extract_with_lopdf(&doc);

        if page_count > 0 && pages.is_empty() {
            tracing::debug!(
                "lopdf extracted no pages out of {}, falling back to pdf-extract",
                page_count
            );
            return extract_with_pdf_extract(data);
        }

        Ok(pages)
    }
}

/// The header may be preceded by up to 1024 bytes of junk
fn has_pdf_header(data: &[u8]) -> bool {
    let window = &data[..data.len().min(1024)];
    window.windows(5).any(|w| w == b"%PDF-")
}

fn classify_error(message: &str) -> ExtractError {
    let lower = message.to_lowercase();
    if lower.contains("encrypt") || lower.contains("password") {
        ExtractError::Encrypted
    } else {
        ExtractError::Parse(message.to_string())
    }
}

/// Extract each page independently; failed pages are logged and left out
fn extract_with_lopdf(doc: &Document) -> Vec<PageText> {
    let mut pages = Vec::new();

    for &page_number in doc.get_pages().keys() {
        match doc.extract_text(&[page_number]) {
            Ok(text) => pages.push(PageText { page_number, text }),
            Err(e) => {
                tracing::warn!("Skipping page {}: {}", page_number, e);
            }
        }
    }

    pages
}

fn extract_with_pdf_extract(data: &[u8]) -> Result<Vec<PageText>, ExtractError> {
    let text =
        pdf_extract::extract_text_from_mem(data).map_err(|e| classify_error(&e.to_string()))?;

    Ok(split_form_feeds(&text))
}

/// pdf-extract separates pages with form feed characters
fn split_form_feeds(text: &str) -> Vec<PageText> {
    text.split('\x0C')
        .enumerate()
        .map(|(i, page)| PageText {
            page_number: i as u32 + 1,
            text: page.to_string(),
        })
        .collect()
}
