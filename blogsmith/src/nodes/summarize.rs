use std::sync::Arc;

use async_trait::async_trait;
use blogsmith_core::{BlogsmithError, Document};
use blogsmith_graph::{GraphContext, GraphNode, GraphState, StateUpdate};
use blogsmith_retrieval::DocumentSplitter;

use crate::prompts::NO_RESULTS_SUMMARY;
use crate::{BlogState, BlogUpdate};

/// Condenses search results into a summary: non-empty result bodies are
/// chunked and the first `max_chunks` chunks are joined with newlines.
pub struct SummarizeNode {
    splitter: Arc<dyn DocumentSplitter>,
    max_chunks: usize,
}

impl SummarizeNode {
    pub fn new(splitter: Arc<dyn DocumentSplitter>, max_chunks: usize) -> Self {
        Self {
            splitter,
            max_chunks,
        }
    }
}

#[async_trait]
impl GraphNode<BlogState> for SummarizeNode {
    async fn invoke_with_context(
        &self,
        input: GraphState<BlogState>,
        context: &GraphContext,
    ) -> Result<StateUpdate<BlogState>, BlogsmithError> {
        let hits = input
            .data
            .search_results
            .as_ref()
            .ok_or_else(|| BlogsmithError::missing_state("search_results"))?;

        let documents: Vec<Document> = hits
            .iter()
            .enumerate()
            .filter(|(_, hit)| !hit.content.is_empty())
            .map(|(index, hit)| {
                Document::new(format!("result-{index}"), hit.content.clone())
                    .with_metadata("source", hit.url.clone())
            })
            .collect();

        if documents.is_empty() {
            tracing::debug!(node = %context.node_id, "no search content, using fallback summary");
            return Ok(StateUpdate::new(BlogUpdate::summary(NO_RESULTS_SUMMARY)));
        }

        let chunks = self.splitter.split_documents(&documents);
        let summary = chunks
            .iter()
            .take(self.max_chunks)
            .map(|chunk| chunk.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        tracing::debug!(
            node = %context.node_id,
            documents = documents.len(),
            chunks = chunks.len(),
            "summary assembled"
        );
        Ok(StateUpdate::new(BlogUpdate::summary(summary)))
    }
}
