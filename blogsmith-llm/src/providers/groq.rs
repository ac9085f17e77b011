//! Groq LLM client

use std::time::Duration;

use async_trait::async_trait;
use blogsmith_core::{BlogsmithError, LlmRequest, LlmResponse, Runnable};
use secrecy::SecretString;

use crate::openai_compatible::OpenAiCompatibleClient;

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const GROQ_DEFAULT_MODEL: &str = "qwen-2.5-32b";
pub const GROQ_DEFAULT_TEMPERATURE: f32 = 0.7;

/// Groq chat client, preset to `qwen-2.5-32b` at temperature 0.7.
#[derive(Clone, Debug)]
pub struct GroqClient(OpenAiCompatibleClient);

impl GroqClient {
    pub fn new(api_key: SecretString) -> Result<Self, BlogsmithError> {
        Self::with_base_url(api_key, GROQ_BASE_URL)
    }

    pub fn with_base_url(api_key: SecretString, base_url: &str) -> Result<Self, BlogsmithError> {
        let client = OpenAiCompatibleClient::builder()
            .base_url(base_url)?
            .api_key_secret(api_key)
            .default_model(GROQ_DEFAULT_MODEL)
            .temperature(GROQ_DEFAULT_TEMPERATURE)
            .timeout(Duration::from_secs(120))
            .build()?;
        Ok(Self(client))
    }

    /// Set the model to use
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.0.set_default_model(model);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.0.set_temperature(temperature);
        self
    }

    pub fn model(&self) -> &str {
        self.0.default_model()
    }
}

#[async_trait]
impl Runnable<LlmRequest, LlmResponse> for GroqClient {
    async fn invoke(&self, input: LlmRequest) -> Result<LlmResponse, BlogsmithError> {
        self.0.invoke(input).await
    }
}
