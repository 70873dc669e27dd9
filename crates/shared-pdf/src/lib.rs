//! Shared PDF handling utilities
//!
//! This crate provides page-level text extraction from PDF documents,
//! used by the document corpus loader.

pub mod error;
pub mod extract;

pub use error::ExtractError;
pub use extract::{PageSource, PageText, PdfPageSource};
