use std::sync::Arc;

use async_trait::async_trait;
use blogsmith_core::{complete, BlogsmithError, Llm};
use blogsmith_graph::{GraphContext, GraphNode, GraphState, StateUpdate};
use blogsmith_prompt::PromptTemplate;

use crate::prompts::GENERATE_PROMPT;
use crate::{BlogState, BlogUpdate};

/// Drafts the blog from the topic and summary.
pub struct GenerateNode {
    llm: Arc<dyn Llm>,
    prompt: PromptTemplate,
}

impl GenerateNode {
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self {
            llm,
            prompt: PromptTemplate::new(GENERATE_PROMPT),
        }
    }

    /// Replaces the prompt. It may use `{{topic}}` and `{{summary}}`.
    pub fn with_prompt(mut self, prompt: PromptTemplate) -> Self {
        self.prompt = prompt;
        self
    }
}

#[async_trait]
impl GraphNode<BlogState> for GenerateNode {
    async fn invoke_with_context(
        &self,
        input: GraphState<BlogState>,
        context: &GraphContext,
    ) -> Result<StateUpdate<BlogState>, BlogsmithError> {
        let state = &input.data;
        let summary = state
            .summary
            .as_deref()
            .ok_or_else(|| BlogsmithError::missing_state("summary"))?;

        let prompt = self
            .prompt
            .render_strict([("topic", state.topic.as_str()), ("summary", summary)])?;
        let blog = complete(self.llm.as_ref(), &prompt).await?;

        tracing::debug!(node = %context.node_id, chars = blog.chars().count(), "draft generated");
        Ok(StateUpdate::new(BlogUpdate::blog(blog)))
    }
}
