//! Text extraction and normalization for OCR documents.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DocBriefError, DocBriefResult, ErrorCode};
use crate::types::Document;

static DISALLOWED_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[^\w\s.,;:'"()\-/]"#).unwrap());

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Flatten a document's pages into one string.
///
/// Words are joined with a single space within a page, pages are joined with
/// a single space, and the result is trimmed.
pub fn extract_text(document: &Document) -> DocBriefResult<String> {
    let pages = document.content.as_ref().ok_or_else(|| {
        DocBriefError::structure(ErrorCode::DocMissingContent, "document has no content")
    })?;

    let mut page_texts = Vec::with_capacity(pages.len());
    for (page_index, page) in pages.iter().enumerate() {
        let words = page.words.as_ref().ok_or_else(|| {
            DocBriefError::structure(
                ErrorCode::DocMissingWords,
                format!("page {} has no words", page_index),
            )
        })?;

        let mut tokens = Vec::with_capacity(words.len());
        for (word_index, word) in words.iter().enumerate() {
            let token = word.content.as_deref().ok_or_else(|| {
                DocBriefError::structure(
                    ErrorCode::DocMissingWordContent,
                    format!("word {} on page {} has no content", word_index, page_index),
                )
            })?;
            tokens.push(token);
        }
        page_texts.push(tokens.join(" "));
    }

    Ok(page_texts.join(" ").trim().to_string())
}

/// Normalize raw OCR text.
///
/// Drops every character outside word characters, whitespace and
/// `. , ; : ' " ( ) - /`, collapses whitespace runs to one space and
/// lowercases. Stripping runs before collapsing so the output is a fixed
/// point: `clean_text(clean_text(s)) == clean_text(s)`.
pub fn clean_text(text: &str) -> String {
    let stripped = DISALLOWED_CHARS.replace_all(text, "");
    let collapsed = WHITESPACE_RUNS.replace_all(&stripped, " ");
    collapsed.to_lowercase()
}
