use std::collections::HashMap;

use blogsmith::{BlogPipeline, BlogsmithConfig, ConfigError};
use secrecy::ExposeSecret;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn reads_required_keys_and_defaults() {
    let config = BlogsmithConfig::from_lookup(lookup(&[
        ("TAVILY_API_KEY", "tvly"),
        ("GROQ_API_KEY", "gsk"),
    ]))
    .unwrap();

    assert_eq!(config.search_api_key.expose_secret(), "tvly");
    assert_eq!(config.llm_api_key.expose_secret(), "gsk");
    assert!(config.tracing_enabled);
    assert!(config.langsmith_api_key.is_none());
    assert_eq!(config.langsmith_project, "blogsmith");
    assert_eq!(config.model, "qwen-2.5-32b");
    assert_eq!(config.temperature, 0.7);
    assert_eq!(config.max_search_results, 3);
    assert_eq!(config.chunk_size, 1000);
    assert_eq!(config.chunk_overlap, 100);
    assert_eq!(config.summary_chunk_limit, 3);
    assert_eq!(config.min_blog_chars, 500);
}

#[test]
fn missing_key_is_reported_by_name() {
    let error = BlogsmithConfig::from_lookup(lookup(&[("TAVILY_API_KEY", "tvly")])).unwrap_err();
    assert!(matches!(error, ConfigError::MissingVar("GROQ_API_KEY")));

    let error = BlogsmithConfig::from_lookup(lookup(&[
        ("TAVILY_API_KEY", "  "),
        ("GROQ_API_KEY", "gsk"),
    ]))
    .unwrap_err();
    assert!(matches!(error, ConfigError::MissingVar("TAVILY_API_KEY")));
}

#[test]
fn optional_overrides_apply() {
    let config = BlogsmithConfig::from_lookup(lookup(&[
        ("TAVILY_API_KEY", "tvly"),
        ("GROQ_API_KEY", "gsk"),
        ("LANGCHAIN_TRACING_V2", "false"),
        ("LANGCHAIN_API_KEY", "ls"),
        ("LANGCHAIN_PROJECT", "blogs"),
        ("BLOGSMITH_MODEL", "llama-3.1-8b-instant"),
        ("BLOGSMITH_LLM_BASE_URL", "http://localhost:8080/v1"),
    ]))
    .unwrap();

    assert!(!config.tracing_enabled);
    assert_eq!(
        config.langsmith_api_key.as_ref().map(|k| k.expose_secret().as_str()),
        Some("ls")
    );
    assert_eq!(config.langsmith_project, "blogs");
    assert_eq!(config.model, "llama-3.1-8b-instant");
    assert_eq!(config.llm_base_url.as_deref(), Some("http://localhost:8080/v1"));
}

#[test]
fn unparseable_tracing_flag_is_rejected() {
    let error = BlogsmithConfig::from_lookup(lookup(&[
        ("TAVILY_API_KEY", "tvly"),
        ("GROQ_API_KEY", "gsk"),
        ("LANGCHAIN_TRACING_V2", "maybe"),
    ]))
    .unwrap_err();
    assert!(matches!(
        error,
        ConfigError::InvalidValue { var: "LANGCHAIN_TRACING_V2", .. }
    ));
}

#[test]
fn builder_rejects_zero_chunk_limit() {
    let mut config = BlogsmithConfig::from_lookup(lookup(&[
        ("TAVILY_API_KEY", "tvly"),
        ("GROQ_API_KEY", "gsk"),
    ]))
    .unwrap();
    config.summary_chunk_limit = 0;

    let error = BlogPipeline::builder(config).build().unwrap_err();
    assert!(error.to_string().contains("summary_chunk_limit"));
}

#[test]
fn builder_wires_default_clients_without_network() {
    let mut config = BlogsmithConfig::from_lookup(lookup(&[
        ("TAVILY_API_KEY", "tvly"),
        ("GROQ_API_KEY", "gsk"),
    ]))
    .unwrap();
    config.tracing_enabled = false;

    let pipeline = BlogPipeline::builder(config).build().unwrap();
    assert_eq!(pipeline.steps().len(), 5);
    assert_eq!(pipeline.observer_name(), None);
}

fn keys_only() -> BlogsmithConfig {
    BlogsmithConfig::from_lookup(lookup(&[
        ("TAVILY_API_KEY", "tvly"),
        ("GROQ_API_KEY", "gsk"),
    ]))
    .unwrap()
}

#[test]
fn tracing_without_langsmith_key_logs_through_tracing() {
    let pipeline = BlogPipeline::builder(keys_only()).build().unwrap();
    assert_eq!(pipeline.observer_name(), Some("tracing"));
}

#[test]
fn tracing_with_langsmith_key_uploads_runs() {
    let config = BlogsmithConfig::from_lookup(lookup(&[
        ("TAVILY_API_KEY", "tvly"),
        ("GROQ_API_KEY", "gsk"),
        ("LANGCHAIN_API_KEY", "ls"),
    ]))
    .unwrap();
    let pipeline = BlogPipeline::builder(config).build().unwrap();
    assert_eq!(pipeline.observer_name(), Some("langsmith"));
}

#[test]
fn langsmith_key_is_ignored_when_tracing_is_off() {
    let config = BlogsmithConfig::from_lookup(lookup(&[
        ("TAVILY_API_KEY", "tvly"),
        ("GROQ_API_KEY", "gsk"),
        ("LANGCHAIN_API_KEY", "ls"),
        ("LANGCHAIN_TRACING_V2", "false"),
    ]))
    .unwrap();
    let pipeline = BlogPipeline::builder(config).build().unwrap();
    assert_eq!(pipeline.observer_name(), None);
}
