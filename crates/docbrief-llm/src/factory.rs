//! Factory for creating LLM providers.

use std::sync::Arc;

use secrecy::SecretString;

use docbrief_core::error::DocBriefResult;
use docbrief_core::traits::{Llm, LlmConfig};

use crate::openai::OpenAIProvider;

/// Factory for creating LLM providers.
pub struct LlmFactory;

impl LlmFactory {
    /// Create the provider for `config`, authenticated with `api_key`.
    pub fn create(config: &LlmConfig, api_key: SecretString) -> DocBriefResult<Arc<dyn Llm>> {
        let llm = OpenAIProvider::new(config.clone(), api_key)?;
        Ok(Arc::new(llm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_uses_configured_model() {
        let llm = LlmFactory::create(&LlmConfig::default(), SecretString::new("sk-test".into()))
            .unwrap();
        assert_eq!(llm.model_name(), "gpt-4");
    }
}
