use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. Call after `.env` has been loaded so a
/// `RUST_LOG` set there is honoured.
pub fn init(level: Option<&str>) -> anyhow::Result<()> {
    let chosen = directive(level, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&chosen)
        .map_err(|e| anyhow!("invalid log filter '{chosen}': {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to set subscriber: {e}"))
}

/// `--log-level` wins, then `RUST_LOG`, then `info`.
fn directive(flag: Option<&str>, env: Option<String>) -> String {
    flag.map(str::to_string)
        .or(env)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}
