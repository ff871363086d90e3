//! Batch summarization endpoint.

use axum::{body::Bytes, extract::State, Json};
use tracing::{info, warn};

use docbrief_core::{parse_documents, process_batch, BatchReport};

use crate::error::{ApiError, ApiResult};
use crate::phase::{PhaseTracker, RequestPhase};
use crate::state::AppState;

/// Summarize a batch of OCR documents.
/// POST /summarize
///
/// The body is read as raw bytes: a missing or malformed body is a 400, and
/// the credential is checked before the body is inspected.
pub async fn summarize_documents(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<BatchReport>> {
    let mut phase = PhaseTracker::new();
    phase.advance(RequestPhase::Validating).map_err(ApiError::processing_failed)?;

    let validated = state
        .summarizer()
        .and_then(|summarizer| parse_documents(&body).map(|documents| (summarizer, documents)));

    let (summarizer, documents) = match validated {
        Ok(parts) => parts,
        Err(e) => {
            warn!(error = %e, "Rejecting request");
            phase.advance(RequestPhase::Rejected).map_err(ApiError::processing_failed)?;
            return Err(e.into());
        }
    };

    phase.advance(RequestPhase::Processing).map_err(ApiError::processing_failed)?;
    info!(documents = documents.len(), model = summarizer.model_name(), "Processing batch");
    let outcome = process_batch(&summarizer, &documents).await;

    phase.advance(RequestPhase::Responding).map_err(ApiError::processing_failed)?;
    Ok(Json(outcome.into_report()))
}
