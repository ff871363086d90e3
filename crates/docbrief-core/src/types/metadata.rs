//! Per-document and batch-level metadata records.
//!
//! Serialized field names are the human-readable keys of the response body.

use std::collections::BTreeSet;

use serde::{Serialize, Serializer};
use strum::{Display, EnumString};

/// Fallback for a document without `doc_id`.
pub const UNKNOWN_DOCUMENT_ID: &str = "Unknown";
/// Fallback when no flood event location is found.
pub const EVENT_NOT_SPECIFIED: &str = "Not specified";
/// Fallback when no date is found.
pub const DATE_NOT_AVAILABLE: &str = "Date not available";
/// Fallback when no author line is found.
pub const AUTHOR_NOT_AVAILABLE: &str = "Author not available";

/// Classified document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Display, EnumString)]
pub enum DocumentType {
    Report,
    Submission,
    Unknown,
}

/// Metadata derived for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    #[serde(rename = "Document ID")]
    pub document_id: String,
    #[serde(rename = "Number of Pages")]
    pub number_of_pages: usize,
    #[serde(rename = "Document Type")]
    pub document_type: DocumentType,
    #[serde(rename = "Event Description")]
    pub event_description: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Brief Description")]
    pub brief_description: String,
}

/// Lexicographic bounds of the per-document `Date` strings.
///
/// Comparison is plain string ordering, so "1-jan-2024" sorts before
/// "15-mar-2023". An empty batch has empty bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub earliest: String,
    pub latest: String,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.earliest.is_empty() && self.latest.is_empty()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{} to {}", self.earliest, self.latest)
    }
}

impl Serialize for DateRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Aggregate statistics over every document in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverallMetadata {
    #[serde(rename = "Total Documents")]
    pub total_documents: usize,
    #[serde(rename = "Total Pages")]
    pub total_pages: usize,
    #[serde(rename = "Types of Documents")]
    pub document_types: BTreeSet<DocumentType>,
    #[serde(rename = "Date Range")]
    pub date_range: DateRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_wire_keys() {
        let metadata = Metadata {
            document_id: "D-1".to_string(),
            number_of_pages: 2,
            document_type: DocumentType::Report,
            event_description: EVENT_NOT_SPECIFIED.to_string(),
            date: "5-jan-2024".to_string(),
            author: AUTHOR_NOT_AVAILABLE.to_string(),
            brief_description: String::new(),
        };

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["Document ID"], "D-1");
        assert_eq!(value["Number of Pages"], 2);
        assert_eq!(value["Document Type"], "Report");
        assert_eq!(value["Event Description"], "Not specified");
        assert_eq!(value["Date"], "5-jan-2024");
        assert_eq!(value["Author"], "Author not available");
        assert_eq!(value["Brief Description"], "");
    }

    #[test]
    fn test_date_range_rendering() {
        let range = DateRange {
            earliest: "1-jan-2024".to_string(),
            latest: "2-feb-2025".to_string(),
        };
        assert_eq!(range.to_string(), "1-jan-2024 to 2-feb-2025");
        assert_eq!(serde_json::to_value(&range).unwrap(), "1-jan-2024 to 2-feb-2025");

        assert_eq!(DateRange::default().to_string(), "");
    }

    #[test]
    fn test_document_type_display_and_parse() {
        assert_eq!(DocumentType::Submission.to_string(), "Submission");
        assert_eq!("Report".parse::<DocumentType>().unwrap(), DocumentType::Report);
    }
}
