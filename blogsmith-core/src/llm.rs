use serde::{Deserialize, Serialize};

use crate::{BlogsmithError, Runnable};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A chat request. An empty `model` defers to the client's default model.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct LlmRequest {
    #[serde(default)]
    pub model: String,
    pub messages: Vec<Message>,
}

impl LlmRequest {
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            model: String::new(),
            messages: vec![Message::user(prompt)],
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct LlmResponse {
    pub content: String,
}

impl From<String> for LlmResponse {
    fn from(content: String) -> Self {
        Self { content }
    }
}

pub trait Llm: Runnable<LlmRequest, LlmResponse> + Send + Sync {}

impl<T> Llm for T where T: Runnable<LlmRequest, LlmResponse> + Send + Sync {}

/// Sends a single user prompt and returns the generated text.
pub async fn complete(llm: &dyn Llm, prompt: &str) -> Result<String, BlogsmithError> {
    let response = llm.invoke(LlmRequest::from_prompt(prompt)).await?;
    Ok(response.content)
}
