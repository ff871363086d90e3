//! docbrief - summarize a batch of OCR'd legal documents from a JSON file.
//!
//! # Configuration
//!
//! - `OPENAI_API_KEY` - required (or the variable named by `DOCBRIEF_CREDENTIAL_VAR`)
//! - `DOCBRIEF_LLM_BASE_URL`, `DOCBRIEF_LLM_TIMEOUT_SECS` - optional
//!
//! # Usage
//!
//! ```text
//! docbrief summarize matter_documents_data.json
//! docbrief summarize matter_documents_data.json --json > report.json
//! ```

mod commands;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "docbrief_core=info".into()))
        .init();

    commands::run().await
}
