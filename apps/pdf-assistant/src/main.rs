//! PDF Assistant Binary
//!
//! Loads the knowledge base once, then answers one query from the command
//! line or runs an interactive question loop on stdin.

use clap::Parser;
use doc_corpus::{Assistant, AssistantConfig, MatchMode};
use pdf_assistant::{render_answer, run_session, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "pdf-assistant")]
#[command(version, about = "Answer product questions from PDF documentation")]
struct Args {
    /// Directory of PDF documents [env: ASSISTANT_PDF_DIR]
    #[arg(long)]
    pdf_dir: Option<PathBuf>,

    /// Specification JSON file [env: ASSISTANT_SPECS_PATH]
    #[arg(long)]
    specs: Option<PathBuf>,

    /// Number of ranked sentences per answer [env: ASSISTANT_TOP_K]
    #[arg(long)]
    top_k: Option<usize>,

    /// Token matching: exact or stem [env: ASSISTANT_MATCH_MODE]
    #[arg(long)]
    match_mode: Option<MatchMode>,

    /// Print answers as JSON
    #[arg(long)]
    json: bool,

    /// Answer this query and exit instead of starting the interactive loop
    query: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries answers only
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = AssistantConfig::from_env()?;
    if let Some(dir) = args.pdf_dir {
        config = config.with_pdf_dir(dir);
    }
    if let Some(path) = args.specs {
        config = config.with_specs_path(path);
    }
    if let Some(top_k) = args.top_k {
        config = config.with_top_k(top_k);
    }
    if let Some(mode) = args.match_mode {
        config = config.with_match_mode(mode);
    }

    tracing::info!("Loading PDF knowledge base from {}", config.pdf_dir.display());
    let (assistant, startup) = Assistant::from_config(&config);
    tracing::info!(
        "Loaded {} sentences from {} documents ({} skipped)",
        startup.sentences,
        startup.load.documents_loaded,
        startup.load.failures.len()
    );
    if !startup.load.directory_found {
        tracing::warn!("No document directory at {}", config.pdf_dir.display());
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    if !args.query.is_empty() {
        let answer = assistant.answer(&args.query.join(" "));
        println!("{}", render_answer(&answer, format)?);
        return Ok(());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&assistant, stdin.lock(), &mut stdout.lock(), format)
}
