//! Liveness and configuration probe.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process is serving.
    pub status: &'static str,
    /// Whether the credential variable currently resolves. Summarize requests
    /// get a 401 while this is false. The value itself is never exposed.
    pub configured: bool,
    /// Model every summarization request is sent to.
    pub model: String,
    pub version: &'static str,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy",
        configured: state.is_configured(),
        model: state.config.llm.model.clone(),
        version: env!("CARGO_PKG_VERSION"),
    }))
}
