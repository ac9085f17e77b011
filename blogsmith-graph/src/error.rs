use blogsmith_core::BlogsmithError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node failed: {node}: {source}")]
    NodeFailed {
        node: String,
        #[source]
        source: BlogsmithError,
    },
    #[error("missing node: {node}")]
    MissingNode { node: String },
    #[error("graph has no entry node")]
    MissingEntry,
    #[error("invalid edge from '{from}' to '{node}'")]
    InvalidEdge { from: String, node: String },
    #[error("Max steps exceeded: reached {reached}, limit {max}")]
    MaxStepsExceeded { max: usize, reached: usize },
}
