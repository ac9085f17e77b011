mod config;
mod error;
mod graph;
mod observer;

pub use blogsmith_core::state::{GraphState, StateSchema, StateUpdate};
pub use config::{ExecutionConfig, ExecutionOptions};
pub use error::GraphError;
pub use graph::{ExecutableGraph, GraphBuilder, GraphContext, GraphNode, END};
pub use observer::{Observer, TracingObserver};
