use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Body of `POST /runs`: one pipeline step as a LangSmith chain run.
#[derive(Clone, Debug, Serialize)]
pub struct RunCreate {
    pub id: Uuid,
    pub trace_id: Uuid,
    pub name: String,
    pub run_type: &'static str,
    pub start_time: DateTime<Utc>,
    pub inputs: Value,
    pub session_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

impl RunCreate {
    pub fn step(name: impl Into<String>, inputs: Value, project: impl Into<String>) -> Self {
        let id = Uuid::new_v4();
        Self {
            id,
            trace_id: id,
            name: name.into(),
            run_type: "chain",
            start_time: Utc::now(),
            inputs,
            session_name: project.into(),
            extra: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.extra = Some(serde_json::json!({ "metadata": metadata }));
        self
    }
}

/// Body of `PATCH /runs/{id}` closing a run.
#[derive(Clone, Debug, Serialize)]
pub struct RunPatch {
    pub end_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Value>,
}

impl RunPatch {
    pub fn finished(outputs: Value, duration_ms: u128) -> Self {
        Self {
            end_time: Utc::now(),
            outputs: Some(outputs),
            error: None,
            extra: Some(serde_json::json!({
                "metadata": { "duration_ms": u64::try_from(duration_ms).unwrap_or(u64::MAX) }
            })),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            end_time: Utc::now(),
            outputs: None,
            error: Some(error.into()),
            extra: None,
        }
    }
}
