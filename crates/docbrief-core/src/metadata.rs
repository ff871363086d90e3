//! Pattern-based metadata extraction.
//!
//! Every field has a fallback constant, so extraction never fails.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{
    Document, DocumentType, Metadata, AUTHOR_NOT_AVAILABLE, DATE_NOT_AVAILABLE,
    EVENT_NOT_SPECIFIED, UNKNOWN_DOCUMENT_ID,
};

// Case-sensitive; applied to already lowercased text.
static EVENT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"flood event in (\w+)").unwrap());

// D-MMM-YYYY or DD-MMM-YYYY, e.g. 5-jan-2024
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}-\w{3}-\d{4}").unwrap());

static AUTHOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)author: ([\w\s]+)").unwrap());

/// Build the metadata record for one document.
pub fn extract_metadata(cleaned_text: &str, document: &Document, description: &str) -> Metadata {
    Metadata {
        document_id: document_id(document),
        number_of_pages: document.page_count(),
        document_type: classify_document_type(document.doc_type.as_deref().unwrap_or("")),
        event_description: event_description(cleaned_text),
        date: date(cleaned_text),
        author: author(cleaned_text),
        brief_description: description.to_string(),
    }
}

/// `doc_id` verbatim, or "Unknown".
pub fn document_id(document: &Document) -> String {
    document
        .doc_id
        .clone()
        .unwrap_or_else(|| UNKNOWN_DOCUMENT_ID.to_string())
}

/// Classify a free-text type. "report" is checked before "submission".
pub fn classify_document_type(raw_type: &str) -> DocumentType {
    let lowered = raw_type.to_lowercase();
    if lowered.contains("report") {
        DocumentType::Report
    } else if lowered.contains("submission") {
        DocumentType::Submission
    } else {
        DocumentType::Unknown
    }
}

/// Location word following "flood event in".
pub fn event_description(text: &str) -> String {
    EVENT_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| EVENT_NOT_SPECIFIED.to_string())
}

/// First D-MMM-YYYY date in the text.
pub fn date(text: &str) -> String {
    DATE_PATTERN
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DATE_NOT_AVAILABLE.to_string())
}

/// Words and spaces following "author:".
pub fn author(text: &str) -> String {
    AUTHOR_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| AUTHOR_NOT_AVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Page;

    #[test]
    fn test_fallbacks_for_empty_input() {
        let metadata = extract_metadata("", &Document::default(), "");

        assert_eq!(metadata.document_id, "Unknown");
        assert_eq!(metadata.number_of_pages, 0);
        assert_eq!(metadata.document_type, DocumentType::Unknown);
        assert_eq!(metadata.event_description, "Not specified");
        assert_eq!(metadata.date, "Date not available");
        assert_eq!(metadata.author, "Author not available");
        assert_eq!(metadata.brief_description, "");
    }

    #[test]
    fn test_document_type_classification() {
        assert_eq!(classify_document_type("Flood Report v2"), DocumentType::Report);
        assert_eq!(
            classify_document_type("Submission for review"),
            DocumentType::Submission
        );
        assert_eq!(classify_document_type("Memo"), DocumentType::Unknown);
        assert_eq!(
            classify_document_type("Submission responding to REPORT"),
            DocumentType::Report
        );
        assert_eq!(classify_document_type(""), DocumentType::Unknown);
    }

    #[test]
    fn test_event_description() {
        assert_eq!(
            event_description("the flood event in lismore caused damage"),
            "lismore"
        );
        // Pattern is case-sensitive.
        assert_eq!(event_description("Flood Event in Lismore"), "Not specified");
    }

    #[test]
    fn test_date_takes_first_match() {
        assert_eq!(
            date("filed 5-jan-2024, amended 17-feb-2024"),
            "5-jan-2024"
        );
        assert_eq!(date("filed 2024-01-05"), "Date not available");
    }

    #[test]
    fn test_author_is_case_insensitive_and_greedy() {
        assert_eq!(author("Author: Jane Doe, counsel"), "Jane Doe");
        assert_eq!(author("prepared by author: jane doe"), "jane doe");
        assert_eq!(author("no byline here"), "Author not available");
    }

    #[test]
    fn test_extract_metadata_from_document() {
        let document = Document {
            doc_id: Some("MAT-7".to_string()),
            doc_type: Some("Expert Report".to_string()),
            content: Some(vec![Page::from_words(["a"]), Page::from_words(["b"])]),
        };
        let text = "report on the flood event in grafton. author: sam lee. dated 3-mar-2022";

        let metadata = extract_metadata(text, &document, "A report about Grafton.");

        assert_eq!(metadata.document_id, "MAT-7");
        assert_eq!(metadata.number_of_pages, 2);
        assert_eq!(metadata.document_type, DocumentType::Report);
        assert_eq!(metadata.event_description, "grafton");
        assert_eq!(metadata.date, "3-mar-2022");
        assert_eq!(metadata.author, "sam lee");
        assert_eq!(metadata.brief_description, "A report about Grafton.");
    }
}
