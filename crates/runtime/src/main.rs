#![deny(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use runtime::{app, cli::Args};
use tracing_subscriber::EnvFilter;

#[allow(clippy::cast_precision_loss)]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let episodes = app::run(&args)?;

    if !episodes.is_empty() {
        let mean_reward =
            episodes.iter().map(|e| e.total_reward).sum::<f32>() / episodes.len() as f32;
        tracing::info!(episodes = episodes.len(), mean_reward, "Rollouts finished.");
    }
    Ok(())
}
