use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document is empty")]
    Empty,

    #[error("Document is encrypted or password protected")]
    Encrypted,

    #[error("Failed to parse PDF: {0}")]
    Parse(String),
}
