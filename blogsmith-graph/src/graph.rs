use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use async_trait::async_trait;
use blogsmith_core::BlogsmithError;
use serde_json::Value;

use crate::{ExecutionConfig, ExecutionOptions, GraphError, GraphState, StateSchema, StateUpdate};

/// Terminal marker. An edge pointing here ends the run.
pub const END: &str = "__end__";

/// Per-step information handed to nodes and observers.
#[derive(Clone, Debug)]
pub struct GraphContext {
    /// Distinct for every `invoke_graph*` call on the same graph.
    pub invocation: u64,
    pub node_id: String,
    pub step: usize,
}

#[async_trait]
pub trait GraphNode<S: StateSchema>: Send + Sync {
    async fn invoke_with_context(
        &self,
        input: GraphState<S>,
        context: &GraphContext,
    ) -> Result<StateUpdate<S>, BlogsmithError>;
}

pub struct GraphBuilder<S: StateSchema> {
    nodes: HashMap<String, Box<dyn GraphNode<S>>>,
    edges: HashMap<String, String>,
    entry: Option<String>,
    default_config: ExecutionConfig,
}

impl<S: StateSchema> Default for GraphBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateSchema> GraphBuilder<S> {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: HashMap::new(),
            entry: None,
            default_config: ExecutionConfig::default(),
        }
    }

    pub fn add_node<N>(mut self, name: &str, node: N) -> Self
    where
        N: GraphNode<S> + 'static,
    {
        self.nodes.insert(name.to_string(), Box::new(node));
        self
    }

    pub fn set_entry(mut self, name: &str) -> Self {
        self.entry = Some(name.to_string());
        self
    }

    /// Each node has at most one successor; a second edge from the same
    /// node replaces the first.
    pub fn add_edge(mut self, from: &str, to: &str) -> Self {
        self.edges.insert(from.to_string(), to.to_string());
        self
    }

    pub fn with_default_config(mut self, config: ExecutionConfig) -> Self {
        self.default_config = config;
        self
    }

    pub fn build(self) -> ExecutableGraph<S> {
        ExecutableGraph {
            nodes: self.nodes,
            edges: self.edges,
            entry: self.entry,
            default_config: self.default_config,
            invocations: AtomicU64::new(0),
        }
    }
}

pub struct ExecutableGraph<S: StateSchema> {
    nodes: HashMap<String, Box<dyn GraphNode<S>>>,
    edges: HashMap<String, String>,
    entry: Option<String>,
    default_config: ExecutionConfig,
    invocations: AtomicU64,
}

impl<S: StateSchema> ExecutableGraph<S> {
    /// Node names in execution order, starting at the entry.
    pub fn path(&self) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = self.entry.clone();
        while let Some(node) = current {
            if node == END || path.contains(&node) {
                break;
            }
            current = self.edges.get(&node).cloned();
            path.push(node);
        }
        path
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        let entry = self.entry.as_ref().ok_or(GraphError::MissingEntry)?;
        if !self.nodes.contains_key(entry) {
            return Err(GraphError::MissingNode {
                node: entry.clone(),
            });
        }
        for (from, to) in &self.edges {
            if !self.nodes.contains_key(from) {
                return Err(GraphError::MissingNode { node: from.clone() });
            }
            if to != END && !self.nodes.contains_key(to) {
                return Err(GraphError::InvalidEdge {
                    from: from.clone(),
                    node: to.clone(),
                });
            }
        }
        Ok(())
    }

    pub async fn invoke_graph(&self, state: GraphState<S>) -> Result<GraphState<S>, GraphError> {
        self.invoke_graph_with_options(state, ExecutionOptions::default())
            .await
    }

    pub async fn invoke_graph_with_options(
        &self,
        mut state: GraphState<S>,
        options: ExecutionOptions,
    ) -> Result<GraphState<S>, GraphError> {
        self.validate()?;
        let config = self.default_config.merge(&options);
        let observer = options.observer;

        let mut current = match &self.entry {
            Some(entry) => entry.clone(),
            None => return Err(GraphError::MissingEntry),
        };
        let invocation = self.invocations.fetch_add(1, Ordering::Relaxed) + 1;
        let mut step = 0usize;

        loop {
            step += 1;
            if let Some(max) = config.max_steps {
                if step > max {
                    return Err(GraphError::MaxStepsExceeded { max, reached: step });
                }
            }

            let node = self
                .nodes
                .get(&current)
                .ok_or_else(|| GraphError::MissingNode {
                    node: current.clone(),
                })?;
            let context = GraphContext {
                invocation,
                node_id: current.clone(),
                step,
            };

            if let Some(observer) = &observer {
                let input = serde_json::to_value(&state.data).unwrap_or(Value::Null);
                observer.on_node_start(&context, &input).await;
            }
            tracing::debug!(node = %current, step, "running node");

            let started = Instant::now();
            let update = match node.invoke_with_context(state.clone(), &context).await {
                Ok(update) => update,
                Err(source) => {
                    let error = GraphError::NodeFailed {
                        node: current.clone(),
                        source,
                    };
                    if let Some(observer) = &observer {
                        observer.on_error(&context, &error).await;
                    }
                    return Err(error);
                }
            };

            if let Some(observer) = &observer {
                let output = serde_json::to_value(&update.data).unwrap_or(Value::Null);
                observer
                    .on_node_end(&context, &output, started.elapsed().as_millis())
                    .await;
            }
            state = state.apply_update(update);

            match self.edges.get(&current) {
                Some(next) if next != END => current = next.clone(),
                _ => break,
            }
        }

        Ok(state)
    }
}
