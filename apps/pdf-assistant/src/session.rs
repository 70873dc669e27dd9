//! Interactive question loop
//!
//! Answers go to the output stream; logging stays on stderr.

use doc_corpus::{Answer, Assistant};
use std::io::{BufRead, Write};

const EXIT_WORDS: &[&str] = &["quit", "exit", ""];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Answer: ...` lines for people
    #[default]
    Text,
    /// One JSON object per answer
    Json,
}

pub fn render_answer(answer: &Answer, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("Answer: {}", answer)),
        OutputFormat::Json => serde_json::to_string(answer),
    }
}

/// Read questions line by line until an exit word or EOF
pub fn run_session<R: BufRead, W: Write>(
    assistant: &Assistant,
    mut input: R,
    output: &mut W,
    format: OutputFormat,
) -> anyhow::Result<()> {
    writeln!(output, "PDF Assistant ready! Ask me anything about the product.")?;
    writeln!(output, "Type 'quit' to exit\n")?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("EOF reached, ending session");
            break;
        }

        let query = line.trim();
        if EXIT_WORDS.contains(&query.to_lowercase().as_str()) {
            break;
        }

        let answer = assistant.answer(query);
        writeln!(output, "\n{}\n", render_answer(&answer, format)?)?;
    }

    writeln!(output, "\nGoodbye!")?;
    Ok(())
}
