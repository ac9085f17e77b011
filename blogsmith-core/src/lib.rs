mod document;
mod error;
mod llm;
mod runnable;
mod search;
pub mod state;
mod value;

pub use document::Document;
pub use error::BlogsmithError;
pub use llm::{complete, Llm, LlmRequest, LlmResponse, Message, Role};
pub use runnable::Runnable;
pub use search::{SearchHit, WebSearch};
pub use state::{GraphState, StateSchema, StateUpdate};
pub use value::Value;
