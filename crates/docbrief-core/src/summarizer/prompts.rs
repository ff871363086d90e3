//! System instructions for summarization requests.

use crate::types::SummaryKind;

/// Instruction for a single document. Asks for the detailed summary first and
/// the one-sentence description as a separate paragraph.
pub const PER_DOCUMENT_PROMPT: &str = "You are a highly skilled AI trained in legal document analysis. \
Please provide a detailed summary of the following legal document, \
focusing on key legal points, arguments, and conclusions relevant to a legal matter. \
Additionally, provide a one-sentence description of its content. \
Write the detailed summary as a single paragraph, then a blank line, then the one-sentence description.";

/// Instruction for synthesizing all document summaries of a matter.
pub const OVERALL_MATTER_PROMPT: &str = "You are a highly skilled AI trained in legal analysis. \
Synthesize the following legal document summaries into a comprehensive legal overview. \
Highlight key legal themes, draw connections between documents, and emphasize critical legal insights.";

/// System instruction for `kind`.
pub fn system_prompt(kind: SummaryKind) -> &'static str {
    match kind {
        SummaryKind::PerDocument => PER_DOCUMENT_PROMPT,
        SummaryKind::OverallMatter => OVERALL_MATTER_PROMPT,
    }
}
