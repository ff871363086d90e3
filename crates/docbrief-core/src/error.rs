//! Error types for docbrief operations.
//!
//! Every failure carries a structured [`ErrorCode`] so callers (the HTTP
//! layer, the CLI) can map it without string matching.

use thiserror::Error;

/// Result type alias for docbrief operations.
pub type DocBriefResult<T> = Result<T, DocBriefError>;

/// Main error type for all docbrief operations.
#[derive(Error, Debug)]
pub enum DocBriefError {
    /// Credential missing or rejected.
    #[error("Authentication error: {message}")]
    Authentication { message: String, code: ErrorCode },

    /// Request payload rejected before processing.
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        code: ErrorCode,
        suggestion: Option<String>,
    },

    /// A document does not have the expected page/word structure.
    #[error("Document structure error: {message}")]
    Structure {
        message: String,
        code: ErrorCode,
        doc_index: Option<usize>,
    },

    /// LLM operation failed.
    #[error("LLM error: {message}")]
    Llm {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Network error.
    #[error("Network error: {message}")]
    Network {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Authentication (AUTH_xxx)
    AuthInvalidKey,
    AuthMissingCredentials,

    // Validation (VAL_xxx)
    ValInvalidInput,
    ValEmptyBatch,

    // Document structure (DOC_xxx)
    DocMissingContent,
    DocMissingWords,
    DocMissingWordContent,
    DocInvalidShape,

    // LLM (LLM_xxx)
    LlmGenerationFailed,
    LlmInvalidResponse,

    // Network (NET_xxx)
    NetTimeout,
    NetConnectionFailed,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AuthInvalidKey => "AUTH_001",
            ErrorCode::AuthMissingCredentials => "AUTH_003",
            ErrorCode::ValInvalidInput => "VAL_001",
            ErrorCode::ValEmptyBatch => "VAL_006",
            ErrorCode::DocMissingContent => "DOC_001",
            ErrorCode::DocMissingWords => "DOC_002",
            ErrorCode::DocMissingWordContent => "DOC_003",
            ErrorCode::DocInvalidShape => "DOC_004",
            ErrorCode::LlmGenerationFailed => "LLM_002",
            ErrorCode::LlmInvalidResponse => "LLM_003",
            ErrorCode::NetTimeout => "NET_001",
            ErrorCode::NetConnectionFailed => "NET_002",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl DocBriefError {
    /// Create a validation error for a body that is not a list of document objects.
    pub fn invalid_batch(detail: impl std::fmt::Display) -> Self {
        Self::Validation {
            message: format!("No valid JSON data found: {}", detail),
            code: ErrorCode::ValInvalidInput,
            suggestion: Some("Send a JSON array of document objects".to_string()),
        }
    }

    /// Create a validation error for a batch with no documents.
    pub fn empty_batch() -> Self {
        Self::Validation {
            message: "Request contains no documents".to_string(),
            code: ErrorCode::ValEmptyBatch,
            suggestion: Some("Send a non-empty JSON array of documents".to_string()),
        }
    }

    /// Create an error for a missing credential.
    pub fn missing_credential(var: &str) -> Self {
        Self::Authentication {
            message: format!("API key not provided in environment variable {}", var),
            code: ErrorCode::AuthMissingCredentials,
        }
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
            code: ErrorCode::AuthInvalidKey,
        }
    }

    /// Create a document structure error.
    pub fn structure(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Structure {
            message: message.into(),
            code,
            doc_index: None,
        }
    }

    /// Create an LLM error.
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            code: ErrorCode::LlmGenerationFailed,
            source: None,
        }
    }

    /// Create an LLM error for a response that could not be understood.
    pub fn llm_invalid_response(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
            code: ErrorCode::LlmInvalidResponse,
            source: None,
        }
    }

    /// Create a network error from a transport failure.
    pub fn network(message: impl Into<String>, timed_out: bool) -> Self {
        Self::Network {
            message: message.into(),
            code: if timed_out {
                ErrorCode::NetTimeout
            } else {
                ErrorCode::NetConnectionFailed
            },
            source: None,
        }
    }

    /// Attach the position of the offending document in its batch.
    pub fn at_document(self, index: usize) -> Self {
        match self {
            Self::Structure { message, code, .. } => Self::Structure {
                message,
                code,
                doc_index: Some(index),
            },
            other => other,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Authentication { code, .. } => *code,
            Self::Validation { code, .. } => *code,
            Self::Structure { code, .. } => *code,
            Self::Llm { code, .. } => *code,
            Self::Network { code, .. } => *code,
            _ => ErrorCode::Internal,
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Authentication { .. } => {
                Some("Set the API key environment variable named in the message")
            }
            Self::Validation { suggestion, .. } => suggestion.as_deref(),
            Self::Structure { .. } => {
                Some("Each document needs a content array of pages with words arrays")
            }
            Self::Llm { .. } => Some("Please check your LLM provider configuration"),
            _ => None,
        }
    }

    /// Build an error from a non-success HTTP status returned by a provider.
    pub fn from_http_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::authentication(body.to_string()),
            _ => Self::Llm {
                message: format!("HTTP {}: {}", status, body),
                code: ErrorCode::LlmGenerationFailed,
                source: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DocBriefError::invalid_batch("expected a sequence");
        assert_eq!(err.code(), ErrorCode::ValInvalidInput);
        assert!(err.to_string().contains("expected a sequence"));
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_missing_credential_never_contains_value() {
        let err = DocBriefError::missing_credential("OPENAI_API_KEY");
        assert_eq!(err.code(), ErrorCode::AuthMissingCredentials);
        assert!(err.to_string().contains("OPENAI_API_KEY"));
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_structure_error_records_index() {
        let err = DocBriefError::structure(ErrorCode::DocMissingWords, "page 0 has no words")
            .at_document(3);
        match err {
            DocBriefError::Structure { doc_index, code, .. } => {
                assert_eq!(doc_index, Some(3));
                assert_eq!(code, ErrorCode::DocMissingWords);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_http_status_mapping() {
        let err = DocBriefError::from_http_status(401, "bad key");
        assert!(matches!(err, DocBriefError::Authentication { .. }));

        let err = DocBriefError::from_http_status(500, "boom");
        assert_eq!(err.code(), ErrorCode::LlmGenerationFailed);
    }

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::AuthMissingCredentials.as_str(), "AUTH_003");
        assert_eq!(ErrorCode::DocMissingContent.as_str(), "DOC_001");
    }
}
