use regex::Regex;
use secrecy::SecretString;

pub const DEFAULT_API_URL: &str = "https://api.smith.langchain.com";

#[derive(Clone, Debug)]
pub struct LangSmithConfig {
    pub api_key: SecretString,
    pub api_url: String,
    pub project_name: String,
    /// Strings longer than this many bytes are cut before upload.
    pub max_field_bytes: usize,
    pub redact_regex: Option<Regex>,
}

impl LangSmithConfig {
    pub fn new(api_key: SecretString, project_name: impl Into<String>) -> Self {
        Self {
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
            project_name: project_name.into(),
            max_field_bytes: 100_000,
            redact_regex: None,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}
