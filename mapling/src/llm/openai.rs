//! OpenAI Chat Completions implementation of [`ModelClient`].
//!
//! Non-streaming, single call per run. The API key travels inside the
//! [`OpenAIConfig`] passed at construction; the client itself never reads the
//! process environment. Request shape: a fixed system message plus the prompt
//! as one user message.

use async_trait::async_trait;
use tracing::{debug, trace};

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};

use crate::error::Error;
use crate::llm::ModelClient;

/// Model used when the caller does not override it.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Chat Completions client for OpenAI-compatible endpoints.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
}

impl OpenAiClient {
    /// Builds a client from an explicit config (API key, optional base URL)
    /// and model name.
    pub fn new(config: OpenAIConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::with_config(config),
            model: model.into(),
            temperature: None,
        }
    }

    /// Sets the sampling temperature. Lower values are more deterministic.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ModelClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, Error> {
        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage::from(
                SYSTEM_PROMPT,
            )),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage::from(prompt)),
        ];

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(messages);
        if let Some(t) = self.temperature {
            args.temperature(t);
        }
        let request = args
            .build()
            .map_err(|e| Error::Upstream(format!("request build failed: {}", e)))?;

        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            temperature = ?self.temperature,
            "chat completion request"
        );

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| Error::Upstream(format!("OpenAI API error: {}", e)))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::Upstream("model returned no choices".to_string()))?;

        let content = choice
            .message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| Error::Upstream("model returned no text content".to_string()))?;

        trace!(reply_len = content.len(), "chat completion reply");
        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_model_and_temperature() {
        let c = OpenAiClient::new(OpenAIConfig::new(), "gpt-4o").with_temperature(0.2);
        assert_eq!(c.model(), "gpt-4o");
        assert_eq!(c.temperature, Some(0.2));
    }
}
