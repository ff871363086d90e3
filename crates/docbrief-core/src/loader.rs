//! Parsing of document batches from request bodies and files.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{DocBriefError, DocBriefResult, ErrorCode};
use crate::types::Document;

/// Parse a JSON array of documents, rejecting empty or malformed input.
///
/// Only the outer shape is validated here: the body must be a non-empty
/// array of objects. Each object is then converted on its own, and one whose
/// fields have the wrong types is salvaged so it keeps its slot in the batch.
pub fn parse_documents(bytes: &[u8]) -> DocBriefResult<Vec<Document>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(DocBriefError::invalid_batch("empty body"));
    }

    let objects: Vec<Map<String, Value>> =
        serde_json::from_slice(bytes).map_err(DocBriefError::invalid_batch)?;

    if objects.is_empty() {
        return Err(DocBriefError::empty_batch());
    }

    Ok(objects
        .into_iter()
        .enumerate()
        .map(|(index, fields)| convert_document(index, fields))
        .collect())
}

fn convert_document(index: usize, fields: Map<String, Value>) -> Document {
    let value = Value::Object(fields);
    match Document::deserialize(&value) {
        Ok(document) => document,
        Err(e) => {
            let err = DocBriefError::structure(ErrorCode::DocInvalidShape, e.to_string())
                .at_document(index);
            warn!(index, error = %err, "Salvaging mistyped document");
            value.as_object().map(Document::salvage).unwrap_or_default()
        }
    }
}

/// Load a batch of documents from a JSON file.
pub fn load_documents(path: impl AsRef<Path>) -> DocBriefResult<Vec<Document>> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_documents(&bytes)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::types::Page;

    #[test]
    fn test_parse_valid_batch() {
        let body = br#"[
            {"doc_id": "1", "type": "Report", "content": [{"words": [{"content": "a"}]}]},
            {"type": "Memo", "content": []}
        ]"#;
        let documents = parse_documents(body).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].doc_id.as_deref(), Some("1"));
        assert!(documents[1].doc_id.is_none());
    }

    #[test]
    fn test_parse_rejects_missing_and_malformed() {
        let bodies: [&[u8]; 6] = [b"", b"   ", b"{not json", b"null", br#"{"doc_id": "1"}"#, b"[1, 2]"];
        for body in bodies {
            let err = parse_documents(body).unwrap_err();
            assert_eq!(err.code(), ErrorCode::ValInvalidInput, "body {:?}", body);
            assert!(err.suggestion().is_some());
        }
    }

    #[test]
    fn test_mistyped_document_keeps_its_slot() {
        let body = br#"[
            {"doc_id": "A", "type": "Report", "content": [{"words": [{"content": "a"}]}]},
            {"doc_id": "B", "content": "oops"},
            {"doc_id": 7, "content": [{"words": [{"content": "seven"}]}]},
            {"doc_id": "D", "content": ["not a page"]}
        ]"#;
        let documents = parse_documents(body).unwrap();

        assert_eq!(documents.len(), 4);
        assert_eq!(documents[0].doc_id.as_deref(), Some("A"));
        assert_eq!(documents[1].doc_id.as_deref(), Some("B"));
        assert!(documents[1].content.is_none());
        assert_eq!(documents[2].doc_id.as_deref(), Some("7"));
        assert_eq!(documents[2].content, Some(vec![Page::from_words(["seven"])]));
        assert_eq!(documents[3].page_count(), 1);
        assert!(documents[3].content.as_ref().unwrap()[0].words.is_none());
    }

    #[test]
    fn test_parse_rejects_empty_array() {
        let err = parse_documents(b"[]").unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValEmptyBatch);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"doc_id": "F-1", "type": "Submission", "content": [{{"words": []}}]}}]"#
        )
        .unwrap();

        let documents = load_documents(file.path()).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].page_count(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_documents("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DocBriefError::Io(_)));
    }
}
