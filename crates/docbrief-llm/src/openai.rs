//! OpenAI chat-completion provider implementation.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use docbrief_core::error::{DocBriefError, DocBriefResult};
use docbrief_core::traits::{GenerationOptions, Llm, LlmConfig, LlmResponse, TokenUsage};
use docbrief_core::types::{Message, MessageRole};

/// OpenAI LLM provider.
pub struct OpenAIProvider {
    client: Client,
    config: LlmConfig,
    api_key: SecretString,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAIError {
    error: OpenAIErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAIErrorDetail {
    message: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI LLM provider.
    pub fn new(config: LlmConfig, api_key: SecretString) -> DocBriefResult<Self> {
        if api_key.expose_secret().is_empty() {
            return Err(DocBriefError::authentication("OpenAI API key is empty"));
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                DocBriefError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let endpoint = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));

        Ok(Self {
            client,
            config,
            api_key,
            endpoint,
        })
    }

    fn role(role: MessageRole) -> &'static str {
        match role {
            MessageRole::System => "system",
            MessageRole::User => "user",
        }
    }

    fn build_request<'a>(
        &'a self,
        messages: &'a [Message],
        options: &GenerationOptions,
    ) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            temperature: options.temperature.unwrap_or(self.config.temperature),
            messages: messages
                .iter()
                .map(|m| ChatMessage {
                    role: Self::role(m.role),
                    content: &m.content,
                })
                .collect(),
        }
    }
}

/// Parse a successful chat-completion body. No choices is not an error.
fn parse_completion(body: &str) -> DocBriefResult<LlmResponse> {
    let response: ChatResponse = serde_json::from_str(body).map_err(|e| {
        DocBriefError::llm_invalid_response(format!("Failed to parse response: {}", e))
    })?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content);

    let usage = response.usage.map(|u| TokenUsage {
        prompt_tokens: u.prompt_tokens,
        completion_tokens: u.completion_tokens,
        total_tokens: u.total_tokens,
    });

    Ok(LlmResponse { content, usage })
}

/// Turn a non-success status and body into an error.
fn error_from_status(status: u16, body: &str) -> DocBriefError {
    let message = serde_json::from_str::<OpenAIError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string());
    DocBriefError::from_http_status(status, &format!("OpenAI API error: {}", message))
}

#[async_trait]
impl Llm for OpenAIProvider {
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> DocBriefResult<LlmResponse> {
        let options = options.unwrap_or_default();
        let request = self.build_request(messages, &options);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                DocBriefError::network(format!("OpenAI API request failed: {}", e), e.is_timeout())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            DocBriefError::network(format!("Failed to read response body: {}", e), e.is_timeout())
        })?;

        if !status.is_success() {
            return Err(error_from_status(status.as_u16(), &body));
        }

        let response = parse_completion(&body)?;
        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "OpenAI completion received"
            );
        }
        Ok(response)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
