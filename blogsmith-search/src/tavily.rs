use std::time::Duration;

use async_trait::async_trait;
use blogsmith_core::{BlogsmithError, SearchHit, WebSearch};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

pub const TAVILY_BASE_URL: &str = "https://api.tavily.com";

#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

#[derive(Debug, Serialize)]
struct TavilySearchRequest<'a> {
    query: &'a str,
    max_results: usize,
    search_depth: SearchDepth,
}

#[derive(Debug, Deserialize)]
struct TavilySearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Clone)]
pub struct TavilyClient {
    http: Client,
    base_url: String,
    api_key: SecretString,
    max_results: usize,
    search_depth: SearchDepth,
}

impl std::fmt::Debug for TavilyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TavilyClient")
            .field("base_url", &self.base_url)
            .field("max_results", &self.max_results)
            .field("search_depth", &self.search_depth)
            .finish()
    }
}

pub struct TavilyClientBuilder {
    api_key: SecretString,
    base_url: String,
    max_results: usize,
    search_depth: SearchDepth,
    timeout: Duration,
}

impl TavilyClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn search_depth(mut self, search_depth: SearchDepth) -> Self {
        self.search_depth = search_depth;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<TavilyClient, BlogsmithError> {
        if self.max_results == 0 {
            return Err(BlogsmithError::InvalidConfig(
                "max_results must be greater than zero".to_string(),
            ));
        }
        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| BlogsmithError::Search(err.to_string()))?;
        Ok(TavilyClient {
            http,
            base_url: self.base_url,
            api_key: self.api_key,
            max_results: self.max_results,
            search_depth: self.search_depth,
        })
    }
}

impl TavilyClient {
    pub fn builder(api_key: SecretString) -> TavilyClientBuilder {
        TavilyClientBuilder {
            api_key,
            base_url: TAVILY_BASE_URL.to_string(),
            max_results: 3,
            search_depth: SearchDepth::Basic,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }
}

#[async_trait]
impl WebSearch for TavilyClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, BlogsmithError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let request = TavilySearchRequest {
            query,
            max_results: self.max_results,
            search_depth: self.search_depth,
        };

        let response: TavilySearchResponse = self
            .http
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|err| BlogsmithError::Search(err.to_string()))?
            .error_for_status()
            .map_err(|err| BlogsmithError::Search(err.to_string()))?
            .json()
            .await
            .map_err(|err| BlogsmithError::Search(err.to_string()))?;

        let mut results = response.results;
        results.truncate(self.max_results);
        tracing::debug!(query, results = results.len(), "tavily search finished");
        Ok(results)
    }
}
