//! Inbound OCR document model.
//!
//! Field presence is checked by the text extractor rather than by serde so
//! that one malformed document degrades on its own instead of rejecting the
//! whole batch. Documents whose fields have the wrong JSON type go through
//! [`Document::salvage`] for the same reason.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One OCR'd document in a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Caller-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    /// Free-text document type, e.g. "Flood Report v2".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    /// Pages in reading order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Page>>,
}

/// A single page of recognized words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<Word>>,
}

/// A recognized word token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Word {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Document {
    /// Number of pages, zero when `content` is absent.
    pub fn page_count(&self) -> usize {
        self.content.as_ref().map_or(0, Vec::len)
    }

    /// Keep whatever parts of a mistyped document object are still usable.
    ///
    /// Scalar ids and types are stringified. A `content` that is not an array
    /// is dropped, and pages or words of the wrong shape lose their inner
    /// field, so the text extractor reports them as structure errors.
    pub fn salvage(fields: &Map<String, Value>) -> Self {
        Self {
            doc_id: fields.get("doc_id").and_then(scalar_string),
            doc_type: fields.get("type").and_then(scalar_string),
            content: fields
                .get("content")
                .and_then(Value::as_array)
                .map(|pages| pages.iter().map(Page::salvage).collect()),
        }
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl Page {
    fn salvage(value: &Value) -> Self {
        Self {
            words: value
                .get("words")
                .and_then(Value::as_array)
                .map(|words| {
                    words
                        .iter()
                        .map(|word| Word {
                            content: word.get("content").and_then(scalar_string),
                        })
                        .collect()
                }),
        }
    }

    /// Build a page from word strings.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: Some(
                words
                    .into_iter()
                    .map(|w| Word {
                        content: Some(w.into()),
                    })
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "doc_id": "D-1",
            "type": "Flood Report",
            "content": [{"words": [{"content": "Hello"}, {"content": "world"}]}]
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.doc_id.as_deref(), Some("D-1"));
        assert_eq!(doc.doc_type.as_deref(), Some("Flood Report"));
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.content.unwrap()[0], Page::from_words(["Hello", "world"]));
    }

    #[test]
    fn test_missing_fields_are_tolerated() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.doc_id.is_none());
        assert!(doc.doc_type.is_none());
        assert_eq!(doc.page_count(), 0);

        let page: Page = serde_json::from_str("{}").unwrap();
        assert!(page.words.is_none());
    }

    #[test]
    fn test_salvage_mistyped_fields() {
        let value = serde_json::json!({
            "doc_id": 7,
            "type": ["not", "text"],
            "content": [
                {"words": [{"content": "flood"}, {"content": 2024}, {"content": null}]},
                "not a page",
                {"words": "nope"}
            ]
        });
        let doc = Document::salvage(value.as_object().unwrap());

        assert_eq!(doc.doc_id.as_deref(), Some("7"));
        assert!(doc.doc_type.is_none());
        assert_eq!(doc.page_count(), 3);

        let pages = doc.content.unwrap();
        let words = pages[0].words.as_ref().unwrap();
        assert_eq!(words[0].content.as_deref(), Some("flood"));
        assert_eq!(words[1].content.as_deref(), Some("2024"));
        assert!(words[2].content.is_none());
        assert!(pages[1].words.is_none());
        assert!(pages[2].words.is_none());
    }

    #[test]
    fn test_salvage_drops_non_array_content() {
        let value = serde_json::json!({"doc_id": "B", "content": "oops"});
        let doc = Document::salvage(value.as_object().unwrap());
        assert_eq!(doc.doc_id.as_deref(), Some("B"));
        assert!(doc.content.is_none());
    }
}
