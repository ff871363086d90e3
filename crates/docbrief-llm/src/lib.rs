//! docbrief-llm - LLM provider implementations for docbrief.
//!
//! Only OpenAI-compatible chat-completion endpoints are supported. Each call
//! is a single blocking request with a configurable timeout and no retries.
//!
//! # Example
//!
//! ```ignore
//! use docbrief_llm::LlmFactory;
//! use secrecy::SecretString;
//!
//! let llm = LlmFactory::create(&LlmConfig::default(), SecretString::new(key))?;
//! ```

mod factory;
mod openai;

pub use factory::LlmFactory;
pub use openai::OpenAIProvider;

// Re-export core types for convenience
pub use docbrief_core::traits::{GenerationOptions, Llm, LlmConfig, LlmResponse};
