//! Summary request kinds and outcomes.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Detailed-summary text substituted when no model answer is available.
pub const SUMMARY_NOT_AVAILABLE: &str = "Summary not available";

/// Which instruction a summarization request uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SummaryKind {
    /// One document; the answer carries a detailed summary and a one-line description.
    PerDocument,
    /// Synthesis across all per-document summaries of a batch.
    OverallMatter,
}

/// Detailed summary plus one-line description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub detailed: String,
    /// Empty when the model gave no second paragraph.
    pub description: String,
}

impl SummaryResult {
    pub fn new(detailed: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            detailed: detailed.into(),
            description: description.into(),
        }
    }

    /// The fallback pair ("Summary not available", "").
    pub fn unavailable() -> Self {
        Self::new(SUMMARY_NOT_AVAILABLE, "")
    }
}

/// Tagged result of one summarization call.
///
/// Keeps a genuine model answer apart from the fallback even when the text
/// happens to be identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Generated(SummaryResult),
    Unavailable { reason: String },
}

impl SummaryOutcome {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    /// Detailed text, or the fallback text when unavailable.
    pub fn detailed(&self) -> &str {
        match self {
            Self::Generated(result) => &result.detailed,
            Self::Unavailable { .. } => SUMMARY_NOT_AVAILABLE,
        }
    }

    /// One-line description, empty when unavailable.
    pub fn description(&self) -> &str {
        match self {
            Self::Generated(result) => &result.description,
            Self::Unavailable { .. } => "",
        }
    }

    /// Collapse into the wire pair.
    pub fn into_result(self) -> SummaryResult {
        match self {
            Self::Generated(result) => result,
            Self::Unavailable { .. } => SummaryResult::unavailable(),
        }
    }
}
