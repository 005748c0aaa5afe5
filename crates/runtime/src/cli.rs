use std::path::PathBuf;

use clap::Parser;

/// Play racetrack episodes with a random policy.
#[derive(Parser, Debug, Clone)]
#[command(name = "race_runtime", version, about)]
pub struct Args {
    /// Number of episodes to play
    #[arg(long, default_value_t = 5)]
    pub episodes: u64,

    /// Override the configured episode length
    #[arg(long)]
    pub max_steps: Option<u32>,

    /// Seed for the random policy; episode `i` resets with `seed + i`
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// JSON environment configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON track layout; defaults to the built-in racetrack1
    #[arg(long)]
    pub track: Option<PathBuf>,

    /// Reload the track file when it changes on disk
    #[arg(long, requires = "track")]
    pub watch: bool,

    /// Run this many environments side by side
    #[arg(long, default_value_t = 1)]
    pub envs: usize,

    /// Log a progress line every N steps (0 disables)
    #[arg(long, default_value_t = 10)]
    pub log_every: u32,
}
