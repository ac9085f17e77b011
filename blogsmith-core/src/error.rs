use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogsmithError {
    #[error("LLM provider failed: {0}")]
    LlmProvider(String),
    #[error("Web search failed: {0}")]
    Search(String),
    #[error("Missing required state key '{key}'")]
    MissingState { key: String },
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BlogsmithError {
    pub fn missing_state(key: impl Into<String>) -> Self {
        BlogsmithError::MissingState { key: key.into() }
    }

    /// True for failures raised by an external service rather than by the
    /// workflow's own checks.
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            BlogsmithError::LlmProvider(_) | BlogsmithError::Search(_)
        )
    }
}
