use blogsmith_core::BlogsmithError;
use blogsmith_graph::GraphError;
use thiserror::Error;

use crate::ConfigError;

/// Why a pipeline run produced no blog.
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("step '{step}' is missing required state '{key}'")]
    MissingState { step: String, key: String },
    #[error("step '{step}' failed validation: {reason}")]
    Validation { step: String, reason: String },
    #[error("step '{step}' failed: {source}")]
    Service {
        step: String,
        #[source]
        source: BlogsmithError,
    },
    #[error(transparent)]
    Graph(GraphError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BlogError {
    pub fn step(&self) -> Option<&str> {
        match self {
            BlogError::MissingState { step, .. }
            | BlogError::Validation { step, .. }
            | BlogError::Service { step, .. } => Some(step),
            _ => None,
        }
    }
}

impl From<GraphError> for BlogError {
    fn from(error: GraphError) -> Self {
        match error {
            GraphError::NodeFailed { node, source } => match source {
                BlogsmithError::MissingState { key } => BlogError::MissingState { step: node, key },
                BlogsmithError::Validation(reason) => BlogError::Validation { step: node, reason },
                other => BlogError::Service {
                    step: node,
                    source: other,
                },
            },
            other => BlogError::Graph(other),
        }
    }
}
