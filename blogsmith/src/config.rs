use secrecy::SecretString;
use thiserror::Error;

pub const ENV_SEARCH_API_KEY: &str = "TAVILY_API_KEY";
pub const ENV_LLM_API_KEY: &str = "GROQ_API_KEY";
pub const ENV_TRACING: &str = "LANGCHAIN_TRACING_V2";
pub const ENV_LANGSMITH_API_KEY: &str = "LANGCHAIN_API_KEY";
pub const ENV_LANGSMITH_PROJECT: &str = "LANGCHAIN_PROJECT";
pub const ENV_MODEL: &str = "BLOGSMITH_MODEL";
pub const ENV_LLM_BASE_URL: &str = "BLOGSMITH_LLM_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value '{value}' for {var}")]
    InvalidValue { var: &'static str, value: String },
    #[error("invalid {field} configuration: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Everything the pipeline needs, passed explicitly into
/// [`BlogPipeline::builder`](crate::BlogPipeline::builder).
#[derive(Clone, Debug)]
pub struct BlogsmithConfig {
    pub search_api_key: SecretString,
    pub llm_api_key: SecretString,
    pub tracing_enabled: bool,
    pub langsmith_api_key: Option<SecretString>,
    pub langsmith_project: String,
    pub model: String,
    /// Overrides the provider's API base URL (e.g. a proxy).
    pub llm_base_url: Option<String>,
    pub temperature: f32,
    pub max_search_results: usize,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    /// How many leading chunks make up the summary.
    pub summary_chunk_limit: usize,
    /// Drafts shorter than this many characters fail review.
    pub min_blog_chars: usize,
}

impl BlogsmithConfig {
    pub fn new(search_api_key: SecretString, llm_api_key: SecretString) -> Self {
        Self {
            search_api_key,
            llm_api_key,
            tracing_enabled: true,
            langsmith_api_key: None,
            langsmith_project: "blogsmith".to_string(),
            model: blogsmith_llm::providers::groq::GROQ_DEFAULT_MODEL.to_string(),
            llm_base_url: None,
            temperature: blogsmith_llm::providers::groq::GROQ_DEFAULT_TEMPERATURE,
            max_search_results: 3,
            chunk_size: 1_000,
            chunk_overlap: 100,
            summary_chunk_limit: 3,
            min_blog_chars: 500,
        }
    }

    /// Reads the process environment once.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .map(SecretString::new)
                .ok_or(ConfigError::MissingVar(var))
        };

        let mut config = Self::new(required(ENV_SEARCH_API_KEY)?, required(ENV_LLM_API_KEY)?);

        if let Some(value) = lookup(ENV_TRACING) {
            config.tracing_enabled = parse_flag(ENV_TRACING, &value)?;
        }
        config.langsmith_api_key = lookup(ENV_LANGSMITH_API_KEY)
            .filter(|value| !value.trim().is_empty())
            .map(SecretString::new);
        if let Some(project) = lookup(ENV_LANGSMITH_PROJECT).filter(|v| !v.is_empty()) {
            config.langsmith_project = project;
        }
        if let Some(model) = lookup(ENV_MODEL).filter(|v| !v.is_empty()) {
            config.model = model;
        }
        config.llm_base_url = lookup(ENV_LLM_BASE_URL).filter(|v| !v.is_empty());

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::Invalid {
                field: "chunk_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.summary_chunk_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "summary_chunk_limit",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.max_search_results == 0 {
            return Err(ConfigError::Invalid {
                field: "max_search_results",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
        }),
    }
}
