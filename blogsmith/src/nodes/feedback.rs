use std::sync::Arc;

use async_trait::async_trait;
use blogsmith_core::{complete, BlogsmithError, Llm};
use blogsmith_graph::{GraphContext, GraphNode, GraphState, StateUpdate};
use blogsmith_prompt::PromptTemplate;

use crate::prompts::{IMPROVE_KEYWORD, REFINE_PROMPT};
use crate::{BlogState, BlogUpdate};

/// Rewrites `final_blog` when the feedback asks for an improvement.
/// Any other feedback, or none, leaves the blog as it is.
pub struct FeedbackNode {
    llm: Arc<dyn Llm>,
    prompt: PromptTemplate,
}

impl FeedbackNode {
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self {
            llm,
            prompt: PromptTemplate::new(REFINE_PROMPT),
        }
    }

    /// Replaces the prompt. It may use `{{feedback}}` and `{{final_blog}}`.
    pub fn with_prompt(mut self, prompt: PromptTemplate) -> Self {
        self.prompt = prompt;
        self
    }
}

pub(crate) fn requests_improvement(feedback: &str) -> bool {
    feedback.to_lowercase().contains(IMPROVE_KEYWORD)
}

#[async_trait]
impl GraphNode<BlogState> for FeedbackNode {
    async fn invoke_with_context(
        &self,
        input: GraphState<BlogState>,
        context: &GraphContext,
    ) -> Result<StateUpdate<BlogState>, BlogsmithError> {
        let state = &input.data;
        let final_blog = state
            .final_blog
            .as_deref()
            .ok_or_else(|| BlogsmithError::missing_state("final_blog"))?;

        let feedback = match state.feedback.as_deref() {
            Some(feedback) if requests_improvement(feedback) => feedback,
            Some(feedback) if !feedback.is_empty() => {
                tracing::info!(node = %context.node_id, "feedback does not ask for improvement, keeping blog");
                return Ok(StateUpdate::new(BlogUpdate::default()));
            }
            _ => return Ok(StateUpdate::new(BlogUpdate::default())),
        };

        let prompt = self
            .prompt
            .render_strict([("feedback", feedback), ("final_blog", final_blog)])?;
        let refined = complete(self.llm.as_ref(), &prompt).await?;

        tracing::debug!(node = %context.node_id, chars = refined.chars().count(), "blog refined");
        Ok(StateUpdate::new(BlogUpdate::final_blog(refined)))
    }
}
