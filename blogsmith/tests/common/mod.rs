#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use blogsmith::{
    BlogPipeline, BlogsmithConfig, BlogsmithError, DocumentSplitter, SearchHit, WebSearch,
};
use blogsmith_core::{Document, LlmRequest, LlmResponse, Runnable};
use secrecy::SecretString;

pub fn test_config() -> BlogsmithConfig {
    BlogsmithConfig::new(
        SecretString::new("search-key".to_string()),
        SecretString::new("llm-key".to_string()),
    )
}

pub struct MockSearch {
    pub hits: Vec<SearchHit>,
    pub fail: bool,
    pub queries: Mutex<Vec<String>>,
}

impl MockSearch {
    pub fn returning(hits: Vec<SearchHit>) -> Arc<Self> {
        Arc::new(Self {
            hits,
            fail: false,
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            hits: Vec::new(),
            fail: true,
            queries: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl WebSearch for MockSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, BlogsmithError> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.fail {
            return Err(BlogsmithError::Search("503: unavailable".to_string()));
        }
        Ok(self.hits.clone())
    }
}

/// Replies from a queue; the last reply repeats once the queue drains.
pub struct MockLlm {
    replies: Mutex<VecDeque<String>>,
    pub prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    pub fn replying<I, S>(replies: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Runnable<LlmRequest, LlmResponse> for MockLlm {
    async fn invoke(&self, input: LlmRequest) -> Result<LlmResponse, BlogsmithError> {
        self.prompts
            .lock()
            .unwrap()
            .push(input.messages[0].content.clone());
        let mut replies = self.replies.lock().unwrap();
        let reply = if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().cloned()
        };
        reply
            .map(LlmResponse::from)
            .ok_or_else(|| BlogsmithError::LlmProvider("no reply queued".to_string()))
    }
}

/// Emits `chunk-1..=chunk-n` regardless of input.
pub struct FixedSplitter {
    pub chunks: usize,
    pub seen: Mutex<Vec<Document>>,
}

impl FixedSplitter {
    pub fn new(chunks: usize) -> Arc<Self> {
        Arc::new(Self {
            chunks,
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl DocumentSplitter for FixedSplitter {
    fn split_documents(&self, documents: &[Document]) -> Vec<Document> {
        self.seen.lock().unwrap().extend_from_slice(documents);
        (1..=self.chunks)
            .map(|i| Document::new(format!("chunk-{i}"), format!("chunk-{i}")))
            .collect()
    }
}

pub fn pipeline(
    search: Arc<MockSearch>,
    llm: Arc<MockLlm>,
    splitter: Arc<FixedSplitter>,
) -> BlogPipeline {
    BlogPipeline::builder(test_config())
        .search(search)
        .llm(llm)
        .splitter(splitter)
        .observer(None)
        .build()
        .unwrap()
}

pub fn long_text(chars: usize) -> String {
    "ownership ".repeat(chars / 10 + 1)[..chars].to_string()
}
