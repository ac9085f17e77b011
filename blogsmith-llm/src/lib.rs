// OpenAI-compatible client (always available)
pub mod openai_compatible;

// Provider presets (feature-gated)
pub mod providers;

pub use blogsmith_core::{Llm, LlmRequest, LlmResponse, Message, Role};

pub use openai_compatible::{
    ChatCompletionRequest, MessageContent, OpenAiCompatibleBuilder, OpenAiCompatibleClient,
};

#[cfg(feature = "groq")]
pub use providers::groq::GroqClient;
