//! docbrief-core - Core library for docbrief.
//!
//! This crate turns batches of OCR'd legal documents into per-document
//! summaries, pattern-extracted metadata and one overall-matter synthesis.
//!
//! # Example
//!
//! ```ignore
//! use docbrief_core::{load_documents, process_batch, Summarizer};
//!
//! let documents = load_documents("matter_documents_data.json")?;
//! let summarizer = Summarizer::new(llm);
//! let report = process_batch(&summarizer, &documents).await.into_report();
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod pipeline;
pub mod summarizer;
pub mod text;
pub mod traits;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types
pub use config::{CredentialSource, DocBriefConfig, EnvCredential, StaticCredential};
pub use error::{DocBriefError, DocBriefResult, ErrorCode};
pub use loader::{load_documents, parse_documents};
pub use pipeline::{process_batch, BatchOutcome, BatchReport, DocumentOutcome};
pub use summarizer::Summarizer;
pub use traits::{GenerationOptions, Llm, LlmConfig, LlmResponse};
pub use types::{
    DateRange, Document, DocumentType, Message, MessageRole, Metadata, OverallMetadata, Page,
    SummaryKind, SummaryOutcome, SummaryResult, Word,
};
