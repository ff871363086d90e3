//! Summarization through an [`Llm`] provider.
//!
//! One call per request, no retries and no caching. Every provider failure is
//! turned into [`SummaryOutcome::Unavailable`] so a bad document never aborts
//! a batch.

mod prompts;

pub use prompts::{system_prompt, OVERALL_MATTER_PROMPT, PER_DOCUMENT_PROMPT};

use std::sync::Arc;

use tracing::{debug, warn};

use crate::traits::{GenerationOptions, Llm, DEFAULT_TEMPERATURE};
use crate::types::{Message, SummaryKind, SummaryOutcome, SummaryResult};

/// Paragraph boundary between the detailed summary and the description.
const PARAGRAPH_BREAK: &str = "\n\n";

/// Produces summaries for documents and whole matters.
pub struct Summarizer {
    llm: Arc<dyn Llm>,
    temperature: f32,
}

impl Summarizer {
    /// Create a summarizer using the fixed sampling temperature.
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self {
            llm,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Model identifier of the underlying provider.
    pub fn model_name(&self) -> &str {
        self.llm.model_name()
    }

    /// Summarize `text` with the instruction for `kind`.
    pub async fn summarize(&self, text: &str, kind: SummaryKind) -> SummaryOutcome {
        let messages = [Message::system(system_prompt(kind)), Message::user(text)];
        let options = GenerationOptions {
            temperature: Some(self.temperature),
        };

        debug!(kind = %kind, chars = text.len(), model = self.llm.model_name(), "Requesting summary");

        match self.llm.generate(&messages, Some(options)).await {
            Ok(response) => match response.content {
                Some(content) => SummaryOutcome::Generated(parse_response(&content, kind)),
                None => {
                    warn!(kind = %kind, "Model returned no choices");
                    SummaryOutcome::unavailable("model returned no choices")
                }
            },
            Err(e) => {
                warn!(kind = %kind, error = %e, "Error during summarization");
                SummaryOutcome::unavailable(e.to_string())
            }
        }
    }
}

/// Split a model answer into detailed summary and one-line description.
///
/// Per-document answers are split on blank lines: the first paragraph is the
/// detailed summary and the second (if any) the description, both trimmed.
/// Overall-matter answers are taken whole with an empty description.
pub fn parse_response(content: &str, kind: SummaryKind) -> SummaryResult {
    match kind {
        SummaryKind::PerDocument => {
            let mut paragraphs = content.split(PARAGRAPH_BREAK);
            let detailed = paragraphs.next().unwrap_or("").trim();
            let description = paragraphs.next().map(str::trim).unwrap_or("");
            SummaryResult::new(detailed, description)
        }
        SummaryKind::OverallMatter => SummaryResult::new(content, ""),
    }
}
