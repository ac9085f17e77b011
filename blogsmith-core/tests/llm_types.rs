use std::sync::Mutex;

use blogsmith_core::{complete, BlogsmithError, LlmRequest, LlmResponse, Role, Runnable};
use serde_json::json;

struct Echo {
    seen: Mutex<Vec<LlmRequest>>,
}

#[async_trait::async_trait]
impl Runnable<LlmRequest, LlmResponse> for Echo {
    async fn invoke(&self, input: LlmRequest) -> Result<LlmResponse, BlogsmithError> {
        let reply = format!("echo: {}", input.messages[0].content);
        self.seen.lock().unwrap().push(input);
        Ok(reply.into())
    }
}

#[test]
fn request_from_prompt_is_single_user_message() {
    let request = LlmRequest::from_prompt("hello");
    assert!(request.model.is_empty());
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.messages[0].role, Role::User);
    assert_eq!(request.messages[0].content, "hello");
}

#[test]
fn message_serializes_lowercase_role() {
    let request = LlmRequest::from_prompt("hi");
    let value = serde_json::to_value(&request.messages[0]).unwrap();
    assert_eq!(value, json!({"role": "user", "content": "hi"}));
}

#[tokio::test]
async fn complete_returns_response_text() {
    let llm = Echo {
        seen: Mutex::new(Vec::new()),
    };
    let text = complete(&llm, "write").await.unwrap();
    assert_eq!(text, "echo: write");
    assert_eq!(llm.seen.lock().unwrap().len(), 1);
}
