//! Batch-level aggregation of summaries and metadata.

use std::collections::BTreeSet;

use crate::summarizer::Summarizer;
use crate::types::{DateRange, Metadata, OverallMetadata, SummaryKind, SummaryOutcome};

/// Synthesize one overall-matter summary from per-document summaries.
///
/// The detailed texts are joined with a single space, fallback texts
/// included, and sent as one overall-matter request.
pub async fn overall_summary<S: AsRef<str>>(
    summarizer: &Summarizer,
    detailed_summaries: &[S],
) -> SummaryOutcome {
    let joined = detailed_summaries
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    summarizer.summarize(&joined, SummaryKind::OverallMatter).await
}

/// Combine per-document metadata into batch statistics.
pub fn combine_metadata(records: &[Metadata]) -> OverallMetadata {
    OverallMetadata {
        total_documents: records.len(),
        total_pages: records.iter().map(|m| m.number_of_pages).sum(),
        document_types: records.iter().map(|m| m.document_type).collect::<BTreeSet<_>>(),
        date_range: date_range(records),
    }
}

/// Lexicographic min/max of the `Date` strings. Not calendar-aware.
pub fn date_range(records: &[Metadata]) -> DateRange {
    let dates = records.iter().map(|m| m.date.as_str());
    match (dates.clone().min(), dates.max()) {
        (Some(earliest), Some(latest)) => DateRange {
            earliest: earliest.to_string(),
            latest: latest.to_string(),
        },
        _ => DateRange::default(),
    }
}
