use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::BlogsmithError;

/// One web search result.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct SearchHit {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl SearchHit {
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: content.into(),
            title: None,
            score: None,
        }
    }
}

#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Returns at most the provider's configured number of results. An empty
    /// list is a valid answer.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, BlogsmithError>;
}
