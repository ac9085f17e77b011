#![cfg(feature = "groq")]

use blogsmith_core::Runnable;
use blogsmith_llm::{GroqClient, LlmRequest};
use httpmock::prelude::*;
use secrecy::SecretString;
use serde_json::json;

#[test]
fn groq_client_defaults_to_qwen() {
    let client = GroqClient::new(SecretString::new("key".to_string())).unwrap();
    assert_eq!(client.model(), "qwen-2.5-32b");
    let client = client.with_model("llama-3.3-70b-versatile");
    assert_eq!(client.model(), "llama-3.3-70b-versatile");
}

#[tokio::test]
async fn groq_client_posts_preset_model_and_temperature() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/openai/v1/chat/completions")
            .header("authorization", "Bearer groq-key")
            .json_body_partial(r#"{"model": "qwen-2.5-32b", "temperature": 0.7}"#);
        then.status(200)
            .json_body(json!({"choices": [{"message": {"content": "draft"}}]}));
    });

    let client = GroqClient::with_base_url(
        SecretString::new("groq-key".to_string()),
        &server.url("/openai/v1"),
    )
    .unwrap();
    let resp = client.invoke(LlmRequest::from_prompt("write")).await.unwrap();
    assert_eq!(resp.content, "draft");
    mock.assert();
}
