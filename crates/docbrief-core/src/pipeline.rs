//! The per-batch summarization pipeline.
//!
//! Documents are processed strictly in input order, one summarization call
//! each, followed by one overall-matter call. A document that cannot be
//! processed still yields a metadata record so indexes stay aligned with the
//! input.

use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::aggregate::{combine_metadata, overall_summary};
use crate::metadata::extract_metadata;
use crate::summarizer::Summarizer;
use crate::text::{clean_text, extract_text};
use crate::types::{Document, Metadata, OverallMetadata, SummaryKind, SummaryOutcome};

/// Result for one input document.
#[derive(Debug, Clone)]
pub struct DocumentOutcome {
    pub summary: SummaryOutcome,
    pub metadata: Metadata,
}

/// Everything produced for one batch.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub batch_id: Uuid,
    pub documents: Vec<DocumentOutcome>,
    pub overall_summary: SummaryOutcome,
    pub overall_metadata: OverallMetadata,
}

/// Response body for a processed batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    #[serde(rename = "Overall Matter Summary")]
    pub overall_summary: String,
    #[serde(rename = "Overall Matter Metadata")]
    pub overall_metadata: OverallMetadata,
    #[serde(rename = "Metadata for Each Document")]
    pub documents: Vec<Metadata>,
}

impl BatchOutcome {
    /// Number of documents whose summary came back from the model.
    pub fn generated_count(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| d.summary.is_generated())
            .count()
    }

    /// Shape the outcome into the response body.
    pub fn into_report(self) -> BatchReport {
        BatchReport {
            overall_summary: self.overall_summary.into_result().detailed,
            overall_metadata: self.overall_metadata,
            documents: self.documents.into_iter().map(|d| d.metadata).collect(),
        }
    }
}

/// Extract, clean, summarize and describe one document.
pub async fn process_document(
    summarizer: &Summarizer,
    index: usize,
    document: &Document,
) -> DocumentOutcome {
    let raw_text = match extract_text(document) {
        Ok(text) => text,
        Err(e) => {
            let e = e.at_document(index);
            warn!(index, error = %e, "Skipping summarization for malformed document");
            return DocumentOutcome {
                summary: SummaryOutcome::unavailable(e.to_string()),
                metadata: extract_metadata("", document, ""),
            };
        }
    };

    let cleaned = clean_text(&raw_text);
    let summary = summarizer.summarize(&cleaned, SummaryKind::PerDocument).await;
    let metadata = extract_metadata(&cleaned, document, summary.description());

    debug!(
        index,
        document_id = %metadata.document_id,
        generated = summary.is_generated(),
        "Document processed"
    );

    DocumentOutcome { summary, metadata }
}

/// Run the whole pipeline over a batch.
pub async fn process_batch(summarizer: &Summarizer, documents: &[Document]) -> BatchOutcome {
    let batch_id = Uuid::new_v4();
    let span = info_span!("batch", %batch_id, documents = documents.len());

    async move {
        let mut outcomes = Vec::with_capacity(documents.len());
        for (index, document) in documents.iter().enumerate() {
            outcomes.push(process_document(summarizer, index, document).await);
        }

        let detailed: Vec<&str> = outcomes.iter().map(|d| d.summary.detailed()).collect();
        let overall = overall_summary(summarizer, &detailed).await;

        let metadata: Vec<Metadata> = outcomes.iter().map(|d| d.metadata.clone()).collect();
        let overall_metadata = combine_metadata(&metadata);

        let outcome = BatchOutcome {
            batch_id,
            documents: outcomes,
            overall_summary: overall,
            overall_metadata,
        };

        info!(
            generated = outcome.generated_count(),
            total_pages = outcome.overall_metadata.total_pages,
            overall_generated = outcome.overall_summary.is_generated(),
            "Batch processed"
        );

        outcome
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::DocBriefError;
    use crate::testing::ScriptedLlm;
    use crate::traits::LlmResponse;
    use crate::types::{DocumentType, Page};

    fn doc(id: &str, doc_type: &str, pages: &[&[&str]]) -> Document {
        Document {
            doc_id: Some(id.to_string()),
            doc_type: Some(doc_type.to_string()),
            content: Some(pages.iter().map(|p| Page::from_words(p.iter().copied())).collect()),
        }
    }

    fn answer(text: &str) -> crate::error::DocBriefResult<LlmResponse> {
        Ok(LlmResponse {
            content: Some(text.to_string()),
            usage: None,
        })
    }

    #[tokio::test]
    async fn test_batch_preserves_order_and_counts() {
        let llm = Arc::new(ScriptedLlm::replying([
            "First detail.\n\nFirst line.",
            "Second detail.\n\nSecond line.",
            "Overall synthesis.",
        ]));
        let summarizer = Summarizer::new(llm.clone());
        let documents = vec![
            doc("A", "Flood Report", &[&["Flood", "event", "in", "Lismore"], &["5-Jan-2024"]]),
            doc("B", "Public Submission", &[&["Author:", "Jo", "Smith"]]),
        ];

        let outcome = process_batch(&summarizer, &documents).await;

        assert_eq!(llm.call_count(), 3);
        assert_eq!(outcome.generated_count(), 2);
        assert_eq!(
            llm.calls()[2].0[1].content,
            "First detail. Second detail."
        );

        let report = outcome.into_report();
        assert_eq!(report.overall_summary, "Overall synthesis.");
        assert_eq!(report.overall_metadata.total_documents, 2);
        assert_eq!(report.overall_metadata.total_pages, 3);
        assert_eq!(report.documents.len(), 2);

        let first = &report.documents[0];
        assert_eq!(first.document_id, "A");
        assert_eq!(first.document_type, DocumentType::Report);
        assert_eq!(first.event_description, "lismore");
        assert_eq!(first.date, "5-jan-2024");
        assert_eq!(first.brief_description, "First line.");

        let second = &report.documents[1];
        assert_eq!(second.document_id, "B");
        assert_eq!(second.document_type, DocumentType::Submission);
        assert_eq!(second.author, "jo smith");
        assert_eq!(second.brief_description, "Second line.");
    }

    #[tokio::test]
    async fn test_failed_summary_does_not_stop_batch() {
        let llm = Arc::new(ScriptedLlm::new(vec![
            Err(DocBriefError::llm("connection reset")),
            answer("Second detail.\n\nSecond line."),
            answer("Overall."),
        ]));
        let summarizer = Summarizer::new(llm.clone());
        let documents = vec![doc("A", "Report", &[&["one"]]), doc("B", "Report", &[&["two"]])];

        let outcome = process_batch(&summarizer, &documents).await;

        assert_eq!(llm.call_count(), 3);
        assert!(!outcome.documents[0].summary.is_generated());
        assert_eq!(
            outcome.documents[0].summary.clone().into_result(),
            crate::types::SummaryResult::new("Summary not available", "")
        );
        assert_eq!(outcome.documents[0].metadata.brief_description, "");
        assert_eq!(outcome.documents[1].metadata.brief_description, "Second line.");
        assert_eq!(
            llm.calls()[2].0[1].content,
            "Summary not available Second detail."
        );
    }

    #[tokio::test]
    async fn test_malformed_document_keeps_its_slot() {
        let llm = Arc::new(ScriptedLlm::replying(["Good.\n\nGood line.", "Overall."]));
        let summarizer = Summarizer::new(llm.clone());
        let documents = vec![
            Document {
                doc_id: Some("BROKEN".to_string()),
                doc_type: Some("Submission".to_string()),
                content: Some(vec![Page { words: None }]),
            },
            doc("OK", "Report", &[&["fine"]]),
        ];

        let outcome = process_batch(&summarizer, &documents).await;

        // Only the well-formed document and the overall synthesis reach the model.
        assert_eq!(llm.call_count(), 2);
        let report = outcome.into_report();
        assert_eq!(report.documents.len(), 2);
        assert_eq!(report.documents[0].document_id, "BROKEN");
        assert_eq!(report.documents[0].number_of_pages, 1);
        assert_eq!(report.documents[0].document_type, DocumentType::Submission);
        assert_eq!(report.documents[0].date, "Date not available");
        assert_eq!(report.documents[1].document_id, "OK");
    }

    #[tokio::test]
    async fn test_overall_failure_reports_fallback() {
        let llm = Arc::new(ScriptedLlm::replying(["Only.\n\nLine."]));
        let summarizer = Summarizer::new(llm);

        let report = process_batch(&summarizer, &[doc("A", "Memo", &[&["x"]])])
            .await
            .into_report();

        assert_eq!(report.overall_summary, "Summary not available");
        assert_eq!(report.documents[0].document_type, DocumentType::Unknown);
    }

    #[tokio::test]
    async fn test_report_wire_shape() {
        let llm = Arc::new(ScriptedLlm::replying(["D.\n\nL.", "O."]));
        let summarizer = Summarizer::new(llm);

        let report = process_batch(&summarizer, &[doc("A", "Report", &[&["x"], &["y"]])])
            .await
            .into_report();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["Overall Matter Summary"], "O.");
        assert_eq!(value["Overall Matter Metadata"]["Total Documents"], 1);
        assert_eq!(value["Overall Matter Metadata"]["Total Pages"], 2);
        assert_eq!(
            value["Overall Matter Metadata"]["Types of Documents"],
            serde_json::json!(["Report"])
        );
        assert_eq!(
            value["Overall Matter Metadata"]["Date Range"],
            "Date not available to Date not available"
        );
        assert_eq!(value["Metadata for Each Document"][0]["Brief Description"], "L.");
    }
}
