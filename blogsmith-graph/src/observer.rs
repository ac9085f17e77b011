use async_trait::async_trait;
use serde_json::Value;

use crate::{GraphContext, GraphError};

/// Receives node lifecycle events while a graph runs. The context
/// identifies the invocation, node and step the event belongs to.
#[async_trait]
pub trait Observer: Send + Sync {
    /// Short label used in logs and diagnostics.
    fn name(&self) -> &'static str {
        "custom"
    }

    async fn on_node_start(&self, _context: &GraphContext, _input: &Value) {}
    async fn on_node_end(&self, _context: &GraphContext, _output: &Value, _duration_ms: u128) {}
    async fn on_error(&self, _context: &GraphContext, _error: &GraphError) {}
}

/// Observer that reports node events through `tracing`.
#[derive(Clone, Debug, Default)]
pub struct TracingObserver;

#[async_trait]
impl Observer for TracingObserver {
    fn name(&self) -> &'static str {
        "tracing"
    }

    async fn on_node_start(&self, context: &GraphContext, _input: &Value) {
        tracing::info!(
            invocation = context.invocation,
            node = %context.node_id,
            step = context.step,
            "node started"
        );
    }

    async fn on_node_end(&self, context: &GraphContext, output: &Value, duration_ms: u128) {
        let keys: Vec<&str> = output
            .as_object()
            .map(|map| {
                map.iter()
                    .filter(|(_, value)| !value.is_null())
                    .map(|(key, _)| key.as_str())
                    .collect()
            })
            .unwrap_or_default();
        tracing::info!(
            invocation = context.invocation,
            node = %context.node_id,
            duration_ms = duration_ms as u64,
            keys = ?keys,
            "node finished"
        );
    }

    async fn on_error(&self, context: &GraphContext, error: &GraphError) {
        tracing::error!(
            invocation = context.invocation,
            node = %context.node_id,
            error = %error,
            "node failed"
        );
    }
}
