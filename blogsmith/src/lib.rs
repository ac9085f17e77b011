//! Blog generation workflow: search → summarize → generate → review →
//! collect_feedback, run over a typed [`BlogState`].
//!
//! ```rust,no_run
//! use blogsmith::{BlogPipeline, BlogsmithConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BlogsmithConfig::from_env()?;
//! let pipeline = BlogPipeline::builder(config).build()?;
//!
//! let first = pipeline.generate("Rust ownership").await?;
//! let draft = first.final_blog.clone().unwrap_or_default();
//! let revised = pipeline
//!     .incorporate_feedback("Rust ownership", draft, "please improve clarity")
//!     .await?;
//! println!("{}", revised.final_blog.unwrap_or_default());
//! # Ok(())
//! # }
//! ```
mod config;
mod error;
pub mod nodes;
mod pipeline;
pub mod prompts;
mod state;

pub use blogsmith_core::{BlogsmithError, Llm, SearchHit, WebSearch};
pub use blogsmith_retrieval::DocumentSplitter;
pub use config::{BlogsmithConfig, ConfigError};
pub use error::BlogError;
pub use pipeline::{BlogPipeline, BlogPipelineBuilder};
pub use state::{BlogState, BlogUpdate};
