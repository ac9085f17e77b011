mod args;
mod input;
mod logging;

use anyhow::Context;
use blogsmith::{BlogPipeline, BlogState, BlogsmithConfig};
use clap::Parser;

use crate::args::Args;
use crate::input::Input;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match &args.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to load env file {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }
    logging::init(args.log_level.as_deref())?;

    let mut config = BlogsmithConfig::from_env().context("failed to read configuration")?;
    args.apply(&mut config);
    let pipeline = BlogPipeline::builder(config)
        .build()
        .context("failed to build blog pipeline")?;

    let interactive = args.topic.is_none();
    let mut input = if interactive { Some(Input::new()?) } else { None };

    let topic = match args.topic.clone() {
        Some(topic) => topic,
        None => prompt(&mut input, "Enter a blog topic: ")?,
    };
    let topic = topic.trim().to_string();
    if topic.is_empty() {
        tracing::warn!("no topic given");
        eprintln!("Please enter a topic.");
        return Ok(());
    }

    println!("Generating blog for \"{topic}\"...");
    let state = pipeline.generate(topic.as_str()).await?;
    print_blog("Generated Blog", &state);

    let feedback = match args.feedback.clone() {
        Some(feedback) => feedback,
        None => prompt(&mut input, "Provide feedback (leave blank to skip): ")?,
    };
    let feedback = feedback.trim();
    if feedback.is_empty() {
        return Ok(());
    }

    println!("Incorporating feedback...");
    let draft = state.final_blog.unwrap_or_default();
    let revised = pipeline
        .incorporate_feedback(topic.as_str(), draft, feedback)
        .await?;
    print_blog("Updated Blog", &revised);

    Ok(())
}

fn prompt(input: &mut Option<Input>, text: &str) -> anyhow::Result<String> {
    match input {
        Some(input) => Ok(input.line(text)?.unwrap_or_default()),
        None => Ok(String::new()),
    }
}

fn print_blog(heading: &str, state: &BlogState) {
    println!();
    println!("### {heading}:");
    println!();
    println!("{}", state.final_blog.as_deref().unwrap_or_default());
}
