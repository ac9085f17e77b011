use std::sync::Arc;

use async_trait::async_trait;
use blogsmith_core::{BlogsmithError, WebSearch};
use blogsmith_graph::{GraphContext, GraphNode, GraphState, StateUpdate};

use crate::{BlogState, BlogUpdate};

/// Queries the web search provider with the topic exactly as given.
pub struct SearchNode {
    search: Arc<dyn WebSearch>,
}

impl SearchNode {
    pub fn new(search: Arc<dyn WebSearch>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl GraphNode<BlogState> for SearchNode {
    async fn invoke_with_context(
        &self,
        input: GraphState<BlogState>,
        context: &GraphContext,
    ) -> Result<StateUpdate<BlogState>, BlogsmithError> {
        let hits = self.search.search(&input.data.topic).await?;
        tracing::debug!(node = %context.node_id, hits = hits.len(), "search finished");
        Ok(StateUpdate::new(BlogUpdate::search_results(hits)))
    }
}
