use async_trait::async_trait;
use blogsmith_core::BlogsmithError;
use blogsmith_graph::{GraphContext, GraphNode, GraphState, StateUpdate};

use crate::{BlogState, BlogUpdate};

/// Rejects drafts shorter than `min_chars` characters and promotes the
/// rest to `final_blog`.
pub struct ReviewNode {
    min_chars: usize,
}

impl ReviewNode {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }
}

#[async_trait]
impl GraphNode<BlogState> for ReviewNode {
    async fn invoke_with_context(
        &self,
        input: GraphState<BlogState>,
        _context: &GraphContext,
    ) -> Result<StateUpdate<BlogState>, BlogsmithError> {
        let blog = input
            .data
            .blog
            .as_deref()
            .ok_or_else(|| BlogsmithError::missing_state("blog"))?;

        let chars = blog.chars().count();
        if chars < self.min_chars {
            return Err(BlogsmithError::Validation(format!(
                "generated blog is too short ({chars} < {} characters); re-run the pipeline",
                self.min_chars
            )));
        }
        Ok(StateUpdate::new(BlogUpdate::final_blog(blog)))
    }
}
