//! CLI parsing and command dispatch.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use tracing::info;

use docbrief_core::{
    load_documents, process_batch, BatchOutcome, CredentialSource, DocBriefConfig, DocBriefError,
    DocBriefResult, Llm, LlmConfig, Summarizer,
};
use docbrief_llm::LlmFactory;

#[derive(Parser)]
#[command(name = "docbrief")]
#[command(about = "Summarize batches of OCR'd legal documents")]
#[command(version)]
pub struct Cli {
    /// Config file path (.toml, .json or .yaml); environment is used otherwise
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize every document in a JSON file and the matter as a whole
    Summarize {
        /// JSON array of documents
        file: PathBuf,

        /// Print the HTTP response body instead of the readable report
        #[arg(long)]
        json: bool,

        /// Per-call timeout for the model API in seconds
        #[arg(long, env = "DOCBRIEF_LLM_TIMEOUT_SECS")]
        timeout_secs: Option<u64>,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DocBriefConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => DocBriefConfig::from_env()?,
    };

    match cli.command {
        Commands::Summarize {
            file,
            json,
            timeout_secs,
        } => summarize(config, file, json, timeout_secs).await,
    }
}

async fn summarize(
    mut config: DocBriefConfig,
    file: PathBuf,
    json: bool,
    timeout_secs: Option<u64>,
) -> Result<()> {
    if let Some(secs) = timeout_secs {
        config.llm.timeout_secs = secs;
    }

    let credentials = config.credential_source();
    let output = summarize_file(&config, &credentials, &file, json, LlmFactory::create).await?;
    println!("{}", output);
    Ok(())
}

/// Run the batch in `file` through the pipeline and render the result.
///
/// The credential is resolved before the file is read or a provider is built.
pub async fn summarize_file<B>(
    config: &DocBriefConfig,
    credentials: &dyn CredentialSource,
    file: &Path,
    json: bool,
    build_llm: B,
) -> Result<String>
where
    B: FnOnce(&LlmConfig, SecretString) -> DocBriefResult<Arc<dyn Llm>>,
{
    let api_key = credentials
        .resolve()
        .ok_or_else(|| DocBriefError::missing_credential(&config.credential_var))?;

    let documents = load_documents(file)
        .with_context(|| format!("failed to load documents from {}", file.display()))?;
    info!(documents = documents.len(), file = %file.display(), "Loaded batch");

    let llm = build_llm(&config.llm, api_key)?;
    let summarizer = Summarizer::new(llm);
    let outcome = process_batch(&summarizer, &documents).await;

    let output = if json {
        serde_json::to_string_pretty(&outcome.into_report())?
    } else {
        render_text(&outcome)?
    };
    Ok(output)
}

/// Readable report: each document's summary and metadata, then the matter.
pub fn render_text(outcome: &BatchOutcome) -> Result<String> {
    let mut out = String::new();

    for (i, document) in outcome.documents.iter().enumerate() {
        writeln!(out, "\nDocument {} Summary:\n{}", i + 1, document.summary.detailed())?;
        writeln!(out, "One-Sentence Description:\n{}", document.summary.description())?;
        writeln!(
            out,
            "Metadata:\n{}\n",
            serde_json::to_string_pretty(&document.metadata)?
        )?;
    }

    writeln!(out, "\nOverall Matter Summary:\n{}", outcome.overall_summary.detailed())?;
    writeln!(out, "\nOverall Matter Metadata:")?;
    let overall = serde_json::to_value(&outcome.overall_metadata)?;
    if let Some(fields) = overall.as_object() {
        for (key, value) in fields {
            let value = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            writeln!(out, "{}: {}", key, value)?;
        }
    }

    Ok(out)
}
