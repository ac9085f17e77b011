//! LangSmith run tracing for Blogsmith graphs.
//!
//! Every node execution becomes one LangSmith run: created when the node
//! starts, patched with outputs (or the error) when it finishes. Upload
//! failures are logged and never fail the workflow.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use blogsmith_graph::ExecutionOptions;
//! use blogsmith_langsmith::{LangSmithConfig, LangSmithObserver};
//! use secrecy::SecretString;
//!
//! let config = LangSmithConfig::new(SecretString::new("key".to_string()), "blogsmith");
//! let options = ExecutionOptions {
//!     observer: Some(Arc::new(LangSmithObserver::new(config))),
//!     ..Default::default()
//! };
//! # let _ = options;
//! ```
mod client;
mod config;
mod observer;
mod run;
mod sanitize;

pub use client::{LangSmithClient, LangSmithError, RetryPolicy};
pub use config::LangSmithConfig;
pub use observer::LangSmithObserver;
pub use run::{RunCreate, RunPatch};
pub use sanitize::prepare_payload;
