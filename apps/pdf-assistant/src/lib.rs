//! PDF Assistant
//!
//! Command-line question answering over a directory of product PDFs and a
//! specification file.

pub mod session;

pub use session::{render_answer, run_session, OutputFormat};
