use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use thiserror::Error;
use tokio::time::sleep;
use uuid::Uuid;

use crate::{RunCreate, RunPatch};

#[derive(Debug, Error)]
pub enum LangSmithError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("langsmith rejected run upload ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Upload attempts and the delay before the first retry. The delay
/// doubles per attempt unless the server sends `Retry-After`.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            initial_delay: Duration::from_millis(200),
        }
    }
}

enum Verdict {
    Accepted,
    Retry(Duration),
    Rejected,
}

/// Uploads step runs to the LangSmith runs API.
#[derive(Clone)]
pub struct LangSmithClient {
    http: Client,
    runs_url: String,
    api_key: SecretString,
    retry: RetryPolicy,
}

impl LangSmithClient {
    pub fn new(api_url: &str, api_key: SecretString) -> Self {
        Self {
            http: Client::new(),
            runs_url: format!("{}/runs", api_url.trim_end_matches('/')),
            api_key,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Opens a run. The run id doubles as the idempotency key so a
    /// retried upload never creates a duplicate.
    pub async fn create_run(&self, run: &RunCreate) -> Result<(), LangSmithError> {
        let idempotency_key = run.id.to_string();
        self.upload(run, false, || {
            self.http
                .post(&self.runs_url)
                .header("x-idempotency-key", &idempotency_key)
        })
        .await
    }

    /// Closes a run. An unknown run id (404) counts as delivered.
    pub async fn patch_run(&self, run_id: Uuid, patch: &RunPatch) -> Result<(), LangSmithError> {
        let url = format!("{}/{}", self.runs_url, run_id);
        self.upload(patch, true, || self.http.patch(&url)).await
    }

    async fn upload<B, F>(&self, body: &B, missing_ok: bool, request: F) -> Result<(), LangSmithError>
    where
        B: Serialize + ?Sized,
        F: Fn() -> RequestBuilder,
    {
        let mut delay = self.retry.initial_delay;
        let mut attempt = 0;
        loop {
            attempt += 1;
            let last = attempt >= self.retry.attempts;
            let sent = request()
                .header("x-api-key", self.api_key.expose_secret())
                .json(body)
                .send()
                .await;

            let response = match sent {
                Ok(response) => response,
                Err(err) if !last && (err.is_timeout() || err.is_connect()) => {
                    sleep(delay).await;
                    delay = delay.saturating_mul(2);
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            match verdict(&response, missing_ok, delay) {
                Verdict::Accepted => return Ok(()),
                Verdict::Retry(wait) if !last => {
                    tracing::debug!(status = %response.status(), attempt, "retrying langsmith upload");
                    sleep(wait).await;
                    delay = wait.saturating_mul(2);
                }
                _ => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    return Err(LangSmithError::Rejected { status, body });
                }
            }
        }
    }
}

fn verdict(response: &Response, missing_ok: bool, delay: Duration) -> Verdict {
    let status = response.status();
    if status.is_success() || (missing_ok && status == StatusCode::NOT_FOUND) {
        return Verdict::Accepted;
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        return Verdict::Retry(retry_after.unwrap_or(delay));
    }
    if status.is_server_error() {
        return Verdict::Retry(delay);
    }
    Verdict::Rejected
}
