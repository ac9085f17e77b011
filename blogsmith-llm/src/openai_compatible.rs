//! Generic OpenAI-compatible LLM client
//!
//! Works with any provider exposing OpenAI's chat-completions format (OpenAI,
//! Groq, Together, a local vLLM, ...).

use std::time::Duration;

use async_trait::async_trait;
use blogsmith_core::{BlogsmithError, LlmRequest, LlmResponse, Message, Runnable};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Request body for chat completions endpoint
#[derive(Serialize, Debug, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub stream: bool,
}

/// Non-streaming response from chat completions
#[derive(Deserialize, Debug, Clone)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<MessageContent>,
}

/// Message content as providers actually send it: a plain string or a list
/// of typed parts.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ContentPart {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl MessageContent {
    /// Flattens to plain text; non-text parts are skipped.
    pub fn into_text(self) -> String {
        match self {
            MessageContent::Text(text) => text,
            MessageContent::Parts(parts) => parts.into_iter().filter_map(|part| part.text).collect(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// OpenAI-style error response
#[derive(Deserialize, Debug, Clone)]
pub struct OpenAiError {
    pub error: ErrorDetail,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

#[derive(Clone)]
pub struct OpenAiCompatibleClient {
    http: Client,
    endpoint: Url,
    api_key: SecretString,
    default_model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl std::fmt::Debug for OpenAiCompatibleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatibleClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("default_model", &self.default_model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

pub struct OpenAiCompatibleBuilder {
    base_url: Option<Url>,
    api_key: Option<SecretString>,
    default_model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    timeout: Duration,
}

impl Default for OpenAiCompatibleBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            default_model: None,
            temperature: None,
            max_tokens: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl OpenAiCompatibleBuilder {
    /// Base URL of the API, e.g. `https://api.openai.com/v1`. The
    /// `chat/completions` path is appended.
    pub fn base_url(mut self, base_url: &str) -> Result<Self, BlogsmithError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let url = Url::parse(&normalized)
            .map_err(|err| BlogsmithError::InvalidConfig(format!("invalid base url: {err}")))?;
        self.base_url = Some(url);
        Ok(self)
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(api_key.into()));
        self
    }

    pub fn api_key_secret(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = Some(model.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<OpenAiCompatibleClient, BlogsmithError> {
        let base_url = self
            .base_url
            .ok_or_else(|| BlogsmithError::InvalidConfig("base_url is required".to_string()))?;
        let api_key = self
            .api_key
            .ok_or_else(|| BlogsmithError::InvalidConfig("api_key is required".to_string()))?;
        let default_model = self
            .default_model
            .ok_or_else(|| BlogsmithError::InvalidConfig("default_model is required".to_string()))?;
        let endpoint = base_url
            .join("chat/completions")
            .map_err(|err| BlogsmithError::InvalidConfig(err.to_string()))?;
        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| BlogsmithError::LlmProvider(err.to_string()))?;

        Ok(OpenAiCompatibleClient {
            http,
            endpoint,
            api_key,
            default_model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        })
    }
}

impl OpenAiCompatibleClient {
    pub fn builder() -> OpenAiCompatibleBuilder {
        OpenAiCompatibleBuilder::default()
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub fn set_default_model(&mut self, model: impl Into<String>) {
        self.default_model = model.into();
    }

    pub fn set_temperature(&mut self, temperature: f32) {
        self.temperature = Some(temperature);
    }

    fn to_wire(&self, request: LlmRequest) -> ChatCompletionRequest {
        let model = if request.model.is_empty() {
            self.default_model.clone()
        } else {
            request.model
        };
        ChatCompletionRequest {
            model,
            messages: request.messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            stream: false,
        }
    }
}

#[async_trait]
impl Runnable<LlmRequest, LlmResponse> for OpenAiCompatibleClient {
    async fn invoke(&self, input: LlmRequest) -> Result<LlmResponse, BlogsmithError> {
        let request = self.to_wire(input);
        tracing::debug!(model = %request.model, messages = request.messages.len(), "chat completion request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|err| BlogsmithError::LlmProvider(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|err| err.error.message)
                .unwrap_or(body);
            return Err(BlogsmithError::LlmProvider(format!("{status}: {message}")));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| BlogsmithError::LlmProvider(err.to_string()))?;
        if let Some(usage) = &completion.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "chat completion usage"
            );
        }

        let choice = completion.choices.into_iter().next().ok_or_else(|| {
            BlogsmithError::LlmProvider("response contained no choices".to_string())
        })?;
        let content = choice
            .message
            .content
            .map(MessageContent::into_text)
            .unwrap_or_default();

        Ok(LlmResponse { content })
    }
}
