use std::time::Duration;

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    config::{Config, DEFAULT_COMPLETION_API_BASE},
    errors::CompletionError,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Text-in, text-out access to the language model. One call per invocation,
/// no retries. Implementations hold no per-request state and are shared
/// across concurrent requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Completion client for any provider exposing the OpenAI chat-completions API.
pub struct OpenAiCompatibleClient {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl OpenAiCompatibleClient {
    pub fn new(api_key: &SecretString, model: impl Into<String>) -> Self {
        Self::build(api_key, DEFAULT_COMPLETION_API_BASE, model.into(), DEFAULT_TIMEOUT)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::build(
            &config.completion_api_key,
            &config.completion_api_base,
            config.completion_model.clone(),
            config.completion_timeout(),
        )
    }

    pub fn with_api_base(self, api_base: &str) -> Self {
        let config = self.client.config().clone().with_api_base(api_base);
        Self {
            client: single_attempt_client(config),
            ..self
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build(api_key: &SecretString, api_base: &str, model: String, timeout: Duration) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(api_base);

        Self {
            client: single_attempt_client(config),
            model,
            timeout,
        }
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ]
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompatibleClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        log::debug!(
            "Requesting completion from model {} ({} prompt bytes)",
            self.model,
            prompt.len()
        );

        let response: Value = tokio::time::timeout(
            self.timeout,
            self.client.chat().create_byot(self.request_body(prompt)),
        )
        .await
        .map_err(|_| CompletionError::Timeout(self.timeout))??;

        let content = message_content(&response)?;
        log::debug!("Received completion ({} bytes)", content.len());
        Ok(content)
    }
}

/// async-openai retries 5xx and 429 responses by default; a zero retry
/// budget makes every `complete` a single request.
fn single_attempt_client(config: OpenAIConfig) -> Client<OpenAIConfig> {
    Client::with_config(config).with_backoff(no_retry_backoff())
}

fn no_retry_backoff() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

/// Pulls the first choice's message text out of a chat-completions response.
pub fn message_content(response: &Value) -> Result<String, CompletionError> {
    response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(CompletionError::EmptyChoice)
}
