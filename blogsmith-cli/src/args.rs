use std::path::PathBuf;

use blogsmith::BlogsmithConfig;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "blogsmith", version, about = "Research a topic and write a blog post about it")]
pub struct Args {
    /// Blog topic. Prompts interactively when omitted.
    #[arg(short, long)]
    pub topic: Option<String>,

    /// Feedback applied in a second pass. Mentioning "improve" triggers a rewrite.
    #[arg(short, long)]
    pub feedback: Option<String>,

    /// Chat model to use instead of the default.
    #[arg(long, env = "BLOGSMITH_MODEL")]
    pub model: Option<String>,

    /// Load environment variables from this file instead of `.env`.
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Disable step tracing.
    #[arg(long)]
    pub no_tracing: bool,

    /// Log filter directive. Overrides `RUST_LOG`, which is read after `.env` is loaded.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    pub fn apply(&self, config: &mut BlogsmithConfig) {
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if self.no_tracing {
            config.tracing_enabled = false;
        }
    }
}
