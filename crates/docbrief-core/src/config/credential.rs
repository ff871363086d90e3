//! Resolution of the provider API key.

use secrecy::SecretString;

/// Source of the provider API key, consulted once per request.
pub trait CredentialSource: Send + Sync {
    /// The secret, or `None` when it is not configured.
    fn resolve(&self) -> Option<SecretString>;

    /// Human-readable name of where the secret comes from, safe to log.
    fn describe(&self) -> &str;
}

/// Reads the key from a process environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredential {
    fn resolve(&self) -> Option<SecretString> {
        std::env::var(&self.var)
            .ok()
            .filter(|value| !value.is_empty())
            .map(SecretString::new)
    }

    fn describe(&self) -> &str {
        &self.var
    }
}

/// Fixed key, mainly for tests and embedding.
pub struct StaticCredential {
    value: Option<String>,
}

impl StaticCredential {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// A source that never yields a key.
    pub fn missing() -> Self {
        Self { value: None }
    }
}

impl CredentialSource for StaticCredential {
    fn resolve(&self) -> Option<SecretString> {
        self.value
            .as_ref()
            .filter(|value| !value.is_empty())
            .map(|value| SecretString::new(value.clone()))
    }

    fn describe(&self) -> &str {
        "static"
    }
}
