//! Route definitions for the HTTP API.

mod health;
mod summarize;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Batch summarization
        .route("/", post(summarize::summarize_documents))
        .route("/summarize", post(summarize::summarize_documents))
        // Attach state
        .with_state(state)
}

pub use health::*;
pub use summarize::*;
