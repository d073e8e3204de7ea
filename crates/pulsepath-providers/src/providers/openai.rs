use super::{build_http_client, dispatch, join_url};
use crate::error::{ProviderError, Result};
use crate::traits::ChatCompleter;
use crate::types::{CompletionRequest, CompletionResponse};
use async_trait::async_trait;
use pulsepath_core::{ChatConfig, ReplyFormat};
use reqwest::Client;
use std::time::Duration;

const PROVIDER: &str = "openai";

pub struct OpenAiChatClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    system_prompt: String,
    reply_format: ReplyFormat,
}

impl OpenAiChatClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        let defaults = ChatConfig::default();
        Self {
            client,
            api_key: api_key.into(),
            base_url: defaults.base_url,
            model: defaults.model,
            system_prompt: defaults.system_prompt,
            reply_format: defaults.reply_format,
        }
    }

    pub fn from_config(config: &ChatConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderError::config("chat.api_key is not set"))?;
        let client = build_http_client(Duration::from_secs(config.timeout_secs))?;

        Ok(Self::new(client, api_key)
            .with_base_url(config.base_url.clone())
            .with_model(config.model.clone())
            .with_system_prompt(config.system_prompt.clone())
            .with_reply_format(config.reply_format))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn with_reply_format(mut self, reply_format: ReplyFormat) -> Self {
        self.reply_format = reply_format;
        self
    }

    fn build_request(&self, prompt: &str) -> CompletionRequest {
        CompletionRequest::consultation(&self.model, &self.system_prompt, prompt)
    }

    fn parse_reply(&self, body: &str) -> Result<String> {
        let response: CompletionResponse = serde_json::from_str(body)
            .map_err(|e| ProviderError::malformed(PROVIDER, format!("Invalid JSON: {}", e)))?;

        let message = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::malformed(PROVIDER, "No completion returned"))?
            .message
            .ok_or_else(|| ProviderError::malformed(PROVIDER, "Choice has no message"))?;

        match self.reply_format {
            ReplyFormat::Content => message
                .content
                .ok_or_else(|| ProviderError::malformed(PROVIDER, "Message has no content")),
            ReplyFormat::Message => Ok(message.render()),
        }
    }
}

#[async_trait]
impl ChatCompleter for OpenAiChatClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, prompt: &str) -> Result<String> {
        let url = join_url(&self.base_url, "chat/completions");
        tracing::debug!(provider = PROVIDER, model = %self.model, %url, "POST chat completion");

        let request = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.build_request(prompt));

        let relayed = dispatch(PROVIDER, request).await?;
        self.parse_reply(&relayed.body)
    }
}
