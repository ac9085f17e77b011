use async_trait::async_trait;
use blogsmith_graph::{GraphContext, GraphError, Observer};
use dashmap::DashMap;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::{prepare_payload, LangSmithClient, LangSmithConfig, RunCreate, RunPatch};

/// Observer that records each node execution as a LangSmith chain run.
///
/// Open runs are keyed by graph invocation and node, so one observer can
/// be shared by concurrent runs of the same pipeline.
pub struct LangSmithObserver {
    client: LangSmithClient,
    config: LangSmithConfig,
    open_runs: DashMap<(u64, String), Uuid>,
}

impl LangSmithObserver {
    pub fn new(config: LangSmithConfig) -> Self {
        Self::with_client(
            LangSmithClient::new(&config.api_url, config.api_key.clone()),
            config,
        )
    }

    pub fn with_client(client: LangSmithClient, config: LangSmithConfig) -> Self {
        Self {
            client,
            config,
            open_runs: DashMap::new(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.config.project_name
    }

    fn prepare(&self, value: &Value) -> Value {
        prepare_payload(
            value.clone(),
            self.config.redact_regex.as_ref(),
            self.config.max_field_bytes,
        )
    }

    async fn close(&self, context: &GraphContext, patch: RunPatch) {
        let key = (context.invocation, context.node_id.clone());
        let Some((_, run_id)) = self.open_runs.remove(&key) else {
            return;
        };
        if let Err(err) = self.client.patch_run(run_id, &patch).await {
            tracing::warn!(node = %context.node_id, error = %err, "failed to close langsmith run");
        }
    }
}

#[async_trait]
impl Observer for LangSmithObserver {
    fn name(&self) -> &'static str {
        "langsmith"
    }

    async fn on_node_start(&self, context: &GraphContext, input: &Value) {
        let run = RunCreate::step(&context.node_id, self.prepare(input), &self.config.project_name)
            .with_metadata(json!({
                "invocation": context.invocation,
                "step": context.step,
            }));
        self.open_runs
            .insert((context.invocation, context.node_id.clone()), run.id);
        if let Err(err) = self.client.create_run(&run).await {
            tracing::warn!(node = %context.node_id, error = %err, "failed to create langsmith run");
        }
    }

    async fn on_node_end(&self, context: &GraphContext, output: &Value, duration_ms: u128) {
        let patch = RunPatch::finished(self.prepare(output), duration_ms);
        self.close(context, patch).await;
    }

    async fn on_error(&self, context: &GraphContext, error: &GraphError) {
        self.close(context, RunPatch::failed(error.to_string())).await;
    }
}
