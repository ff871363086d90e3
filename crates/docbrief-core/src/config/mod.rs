//! Configuration system for docbrief.

mod credential;

pub use credential::{CredentialSource, EnvCredential, StaticCredential};

use serde::{Deserialize, Serialize};

use crate::error::{DocBriefError, DocBriefResult};
use crate::traits::LlmConfig;

/// Environment variable holding the provider API key unless overridden.
pub const DEFAULT_CREDENTIAL_VAR: &str = "OPENAI_API_KEY";

/// Main docbrief configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocBriefConfig {
    /// LLM configuration.
    pub llm: LlmConfig,
    /// Name of the environment variable holding the API key.
    pub credential_var: String,
}

impl Default for DocBriefConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig::default(),
            credential_var: DEFAULT_CREDENTIAL_VAR.to_string(),
        }
    }
}

impl DocBriefConfig {
    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> DocBriefResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| DocBriefError::Configuration(e.to_string()))
            }
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| DocBriefError::Configuration(e.to_string())),
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|e| DocBriefError::Configuration(e.to_string())),
            _ => Err(DocBriefError::Configuration(
                "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
            )),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> DocBriefResult<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `DOCBRIEF_*` overrides read through `lookup`.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> DocBriefResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(var) = lookup("DOCBRIEF_CREDENTIAL_VAR").filter(|v| !v.is_empty()) {
            self.credential_var = var;
        }
        if let Some(url) = lookup("DOCBRIEF_LLM_BASE_URL").filter(|v| !v.is_empty()) {
            self.llm.base_url = url;
        }
        if let Some(secs) = lookup("DOCBRIEF_LLM_TIMEOUT_SECS") {
            self.llm.timeout_secs = secs.trim().parse().map_err(|_| {
                DocBriefError::Configuration(format!(
                    "DOCBRIEF_LLM_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    secs
                ))
            })?;
        }
        Ok(self)
    }

    /// Credential source reading `credential_var` from the process environment.
    pub fn credential_source(&self) -> EnvCredential {
        EnvCredential::new(self.credential_var.clone())
    }
}
