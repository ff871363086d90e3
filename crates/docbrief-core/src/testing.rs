//! Test doubles shared by the docbrief crates.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{DocBriefError, DocBriefResult};
use crate::traits::{GenerationOptions, Llm, LlmResponse};
use crate::types::Message;

/// An [`Llm`] that replays a fixed script and records every request.
///
/// Once the script runs out every call fails.
pub struct ScriptedLlm {
    script: Mutex<VecDeque<DocBriefResult<LlmResponse>>>,
    calls: Mutex<Vec<(Vec<Message>, GenerationOptions)>>,
}

impl ScriptedLlm {
    pub fn new(script: Vec<DocBriefResult<LlmResponse>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script of successful text answers.
    pub fn replying<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            answers
                .into_iter()
                .map(|a| {
                    Ok(LlmResponse {
                        content: Some(a.into()),
                        usage: None,
                    })
                })
                .collect(),
        )
    }

    /// Requests seen so far, in order.
    pub fn calls(&self) -> Vec<(Vec<Message>, GenerationOptions)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

#[async_trait]
impl Llm for ScriptedLlm {
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> DocBriefResult<LlmResponse> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((messages.to_vec(), options.unwrap_or_default()));
        }
        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| Err(DocBriefError::llm("script exhausted")))
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
