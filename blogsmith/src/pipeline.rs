use std::sync::Arc;

use blogsmith_core::{Llm, WebSearch};
use blogsmith_graph::{
    ExecutableGraph, ExecutionConfig, ExecutionOptions, GraphBuilder, GraphState, Observer,
    TracingObserver, END,
};
use blogsmith_llm::GroqClient;
use blogsmith_retrieval::{DocumentSplitter, RecursiveCharacterTextSplitter};
use blogsmith_search::TavilyClient;
use tracing::Instrument;

use crate::nodes::{
    FeedbackNode, GenerateNode, ReviewNode, SearchNode, SummarizeNode, COLLECT_FEEDBACK, GENERATE,
    REVIEW, SEARCH, STEP_ORDER, SUMMARIZE,
};
use crate::{BlogError, BlogState, BlogsmithConfig, ConfigError};

/// The compiled search → summarize → generate → review → collect_feedback
/// workflow. Built once, invoked any number of times.
pub struct BlogPipeline {
    graph: ExecutableGraph<BlogState>,
    observer: Option<Arc<dyn Observer>>,
}

impl std::fmt::Debug for BlogPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogPipeline")
            .field("steps", &self.graph.path())
            .field("observer", &self.observer_name())
            .finish()
    }
}

pub struct BlogPipelineBuilder {
    config: BlogsmithConfig,
    search: Option<Arc<dyn WebSearch>>,
    llm: Option<Arc<dyn Llm>>,
    splitter: Option<Arc<dyn DocumentSplitter>>,
    observer: Option<Option<Arc<dyn Observer>>>,
}

impl BlogPipelineBuilder {
    pub fn search(mut self, search: Arc<dyn WebSearch>) -> Self {
        self.search = Some(search);
        self
    }

    pub fn llm(mut self, llm: Arc<dyn Llm>) -> Self {
        self.llm = Some(llm);
        self
    }

    pub fn splitter(mut self, splitter: Arc<dyn DocumentSplitter>) -> Self {
        self.splitter = Some(splitter);
        self
    }

    /// Overrides the observer derived from the config. `None` disables
    /// step tracing entirely.
    pub fn observer(mut self, observer: Option<Arc<dyn Observer>>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn build(self) -> Result<BlogPipeline, BlogError> {
        let config = self.config;
        config.validate()?;

        let search = match self.search {
            Some(search) => search,
            None => default_search(&config)?,
        };
        let llm = match self.llm {
            Some(llm) => llm,
            None => default_llm(&config)?,
        };
        let splitter = match self.splitter {
            Some(splitter) => splitter,
            None => default_splitter(&config)?,
        };
        let observer = match self.observer {
            Some(observer) => observer,
            None => default_observer(&config),
        };

        let graph = GraphBuilder::new()
            .add_node(SEARCH, SearchNode::new(search))
            .add_node(
                SUMMARIZE,
                SummarizeNode::new(splitter, config.summary_chunk_limit),
            )
            .add_node(GENERATE, GenerateNode::new(llm.clone()))
            .add_node(REVIEW, ReviewNode::new(config.min_blog_chars))
            .add_node(COLLECT_FEEDBACK, FeedbackNode::new(llm))
            .set_entry(SEARCH)
            .add_edge(SEARCH, SUMMARIZE)
            .add_edge(SUMMARIZE, GENERATE)
            .add_edge(GENERATE, REVIEW)
            .add_edge(REVIEW, COLLECT_FEEDBACK)
            .add_edge(COLLECT_FEEDBACK, END)
            .with_default_config(ExecutionConfig {
                max_steps: Some(STEP_ORDER.len()),
            })
            .build();
        graph.validate()?;

        Ok(BlogPipeline { graph, observer })
    }
}

impl BlogPipeline {
    pub fn builder(config: BlogsmithConfig) -> BlogPipelineBuilder {
        BlogPipelineBuilder {
            config,
            search: None,
            llm: None,
            splitter: None,
            observer: None,
        }
    }

    /// Name of the observer receiving step events, if any.
    pub fn observer_name(&self) -> Option<&'static str> {
        self.observer.as_ref().map(|observer| observer.name())
    }

    /// Step names in execution order.
    pub fn steps(&self) -> Vec<String> {
        self.graph.path()
    }

    /// Runs every step once over `state`. On failure nothing partial is
    /// returned.
    pub async fn invoke(&self, state: BlogState) -> Result<BlogState, BlogError> {
        let span = tracing::info_span!("blog_pipeline", topic = %state.topic);
        let options = ExecutionOptions {
            observer: self.observer.clone(),
            ..ExecutionOptions::default()
        };
        let result = async {
            tracing::info!("blog pipeline started");
            self.graph
                .invoke_graph_with_options(GraphState::new(state), options)
                .await
        }
        .instrument(span)
        .await;

        match result {
            Ok(state) => {
                let state = state.into_inner();
                tracing::info!(
                    chars = state.final_blog.as_deref().map_or(0, |blog| blog.chars().count()),
                    "blog pipeline finished"
                );
                Ok(state)
            }
            Err(error) => {
                let error = BlogError::from(error);
                tracing::error!(error = %error, "blog pipeline failed");
                Err(error)
            }
        }
    }

    pub async fn generate(&self, topic: impl Into<String>) -> Result<BlogState, BlogError> {
        self.invoke(BlogState::new(topic)).await
    }

    /// Second pass: the whole workflow runs again with the reader's
    /// feedback and the previous blog in the starting state.
    pub async fn incorporate_feedback(
        &self,
        topic: impl Into<String>,
        final_blog: impl Into<String>,
        feedback: impl Into<String>,
    ) -> Result<BlogState, BlogError> {
        let state = BlogState::new(topic)
            .with_final_blog(final_blog)
            .with_feedback(feedback);
        self.invoke(state).await
    }
}

fn default_search(config: &BlogsmithConfig) -> Result<Arc<dyn WebSearch>, ConfigError> {
    let client = TavilyClient::builder(config.search_api_key.clone())
        .max_results(config.max_search_results)
        .build()
        .map_err(|error| ConfigError::Invalid {
            field: "search",
            reason: error.to_string(),
        })?;
    Ok(Arc::new(client))
}

fn default_llm(config: &BlogsmithConfig) -> Result<Arc<dyn Llm>, ConfigError> {
    let client = match &config.llm_base_url {
        Some(base_url) => GroqClient::with_base_url(config.llm_api_key.clone(), base_url),
        None => GroqClient::new(config.llm_api_key.clone()),
    }
    .map_err(|error| ConfigError::Invalid {
        field: "llm",
        reason: error.to_string(),
    })?;
    Ok(Arc::new(
        client
            .with_model(config.model.clone())
            .with_temperature(config.temperature),
    ))
}

fn default_splitter(config: &BlogsmithConfig) -> Result<Arc<dyn DocumentSplitter>, ConfigError> {
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(config.chunk_size)
        .chunk_overlap(config.chunk_overlap)
        .build()
        .map_err(|error| ConfigError::Invalid {
            field: "splitter",
            reason: error.to_string(),
        })?;
    Ok(Arc::new(splitter))
}

fn default_observer(config: &BlogsmithConfig) -> Option<Arc<dyn Observer>> {
    if !config.tracing_enabled {
        return None;
    }
    #[cfg(feature = "langsmith")]
    if let Some(api_key) = &config.langsmith_api_key {
        let langsmith = blogsmith_langsmith::LangSmithConfig::new(
            api_key.clone(),
            config.langsmith_project.clone(),
        );
        return Some(Arc::new(blogsmith_langsmith::LangSmithObserver::new(langsmith)));
    }
    Some(Arc::new(TracingObserver))
}
