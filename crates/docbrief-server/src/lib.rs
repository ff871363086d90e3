//! docbrief-server - HTTP entry point for docbrief.
//!
//! Accepts a JSON array of OCR'd legal documents, summarizes each one,
//! synthesizes an overall-matter summary and returns combined metadata.
//!
//! # Example
//!
//! ```ignore
//! use docbrief_core::DocBriefConfig;
//! use docbrief_server::{create_server, AppState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let state = AppState::new(DocBriefConfig::from_env().unwrap());
//!     let app = create_server(state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod error;
pub mod middleware;
pub mod phase;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use phase::{PhaseTracker, RequestPhase};
pub use state::{AppState, LlmBuilder};

use axum::{extract::DefaultBodyLimit, middleware as axum_middleware, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

/// Largest accepted request body; OCR batches with many pages get big.
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}
