//! Server state management.

use std::sync::Arc;

use secrecy::SecretString;

use docbrief_core::config::{CredentialSource, DocBriefConfig};
use docbrief_core::error::{DocBriefError, DocBriefResult};
use docbrief_core::traits::{Llm, LlmConfig};
use docbrief_core::Summarizer;
use docbrief_llm::LlmFactory;

/// Builds an LLM provider once the per-request credential is known.
pub type LlmBuilder =
    Arc<dyn Fn(&LlmConfig, SecretString) -> DocBriefResult<Arc<dyn Llm>> + Send + Sync>;

/// Shared application state.
///
/// Immutable after startup; every request resolves its own credential and
/// provider.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DocBriefConfig>,
    credentials: Arc<dyn CredentialSource>,
    llm_builder: LlmBuilder,
}

impl AppState {
    /// State reading the credential from the configured environment variable
    /// and talking to the OpenAI provider.
    pub fn new(config: DocBriefConfig) -> Self {
        let credentials = Arc::new(config.credential_source());
        Self::with_parts(config, credentials, Arc::new(LlmFactory::create))
    }

    /// State with an explicit credential source and provider builder.
    pub fn with_parts(
        config: DocBriefConfig,
        credentials: Arc<dyn CredentialSource>,
        llm_builder: LlmBuilder,
    ) -> Self {
        Self {
            config: Arc::new(config),
            credentials,
            llm_builder,
        }
    }

    /// Whether the credential is currently available.
    pub fn is_configured(&self) -> bool {
        self.credentials.resolve().is_some()
    }

    /// Resolve the credential and build a summarizer for one request.
    ///
    /// Fails with an authentication error, before any provider is built,
    /// when the credential is missing.
    pub fn summarizer(&self) -> DocBriefResult<Summarizer> {
        let api_key = self
            .credentials
            .resolve()
            .ok_or_else(|| DocBriefError::missing_credential(self.credentials.describe()))?;
        let llm = (self.llm_builder)(&self.config.llm, api_key)?;
        Ok(Summarizer::new(llm))
    }
}
