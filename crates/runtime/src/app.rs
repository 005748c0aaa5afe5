//! # Rollout Loop
//!
//! Plays episodes against [`rl::RaceEnv`] with a seeded random policy, either
//! one environment at a time with a [`LogObserver`] attached, or several side
//! by side through [`rl::VecEnv`].

use anyhow::{Context, Result};
use rl::{Action, Env, EnvConfig, RaceEnv, Step, VecEnv};
use tracing::{info, warn};
use track::TrackDef;

use crate::cli::Args;
use crate::observer::LogObserver;
use crate::watcher::{self, ReloadFlag};

/// Totals for one finished episode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpisodeSummary {
    pub steps: u32,
    pub total_reward: f32,
    /// Gate points collected, including any lost to a crash
    pub points: i64,
    pub terminated: bool,
    pub truncated: bool,
}

impl EpisodeSummary {
    fn record(&mut self, step: &Step) {
        self.steps = step.info.step_count;
        self.total_reward += step.reward;
        self.points += step.info.points_scored.map_or(0, i64::from);
        self.terminated = step.terminated;
        self.truncated = step.truncated;
    }
}

/// Runs the rollouts described by `args` and returns one summary per episode
/// in completion order.
///
/// # Errors
///
/// Returns an error if the config or track cannot be loaded or validated, or
/// if the environment rejects a call.
pub fn run(args: &Args) -> Result<Vec<EpisodeSummary>> {
    let config = load_config(args)?;
    let layout = load_track(args)?;
    info!(
        track = %layout.name,
        episodes = args.episodes,
        envs = args.envs,
        max_steps = config.max_episode_steps,
        "Starting rollouts..."
    );

    let reload = ReloadFlag::default();
    let _track_watcher = match (&args.track, args.watch) {
        (Some(path), true) => match watcher::start(path, reload.clone()) {
            Ok(w) => Some(w),
            Err(e) => {
                tracing::error!("Failed to start track watcher: {e:?}");
                None
            }
        },
        _ => None,
    };

    if args.envs > 1 {
        run_vectorized(args, &config, &layout)
    } else {
        run_single(args, &config, layout, &reload)
    }
}

fn load_config(args: &Args) -> Result<EnvConfig> {
    let mut config = match &args.config {
        Some(path) => EnvConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EnvConfig::default(),
    };
    if let Some(max_steps) = args.max_steps {
        config.max_episode_steps = max_steps;
    }
    config.validate()?;
    Ok(config)
}

fn load_track(args: &Args) -> Result<TrackDef> {
    match &args.track {
        Some(path) => TrackDef::from_path(path)
            .with_context(|| format!("loading track {}", path.display())),
        None => Ok(TrackDef::racetrack1()),
    }
}

fn run_single(
    args: &Args,
    config: &EnvConfig,
    layout: TrackDef,
    reload: &ReloadFlag,
) -> Result<Vec<EpisodeSummary>> {
    let mut env = RaceEnv::with_track(config.clone(), layout)?;
    let mut rng = fastrand::Rng::with_seed(args.seed);
    let mut observer = LogObserver::new(args.log_every);
    let mut summaries = Vec::new();

    for episode in 0..args.episodes {
        if reload.take() {
            if let Some(path) = &args.track {
                match TrackDef::from_path(path)
                    .map_err(anyhow::Error::from)
                    .and_then(|def| Ok(RaceEnv::with_track(config.clone(), def)?))
                {
                    Ok(new_env) => {
                        info!(track = %new_env.layout().name, "Track reloaded.");
                        env = new_env;
                    }
                    Err(e) => warn!("Keeping previous track; reload failed: {e:#}"),
                }
            }
        }

        env.reset_observed(Some(args.seed.wrapping_add(episode)), &mut observer);
        let mut summary = EpisodeSummary::default();
        loop {
            let action = Action::ALL[rng.usize(..Action::COUNT)];
            let step = env.step_observed(action, &mut observer)?;
            summary.record(&step);
            if step.is_done() {
                break;
            }
        }
        info!(
            episode,
            steps = summary.steps,
            reward = summary.total_reward,
            points = summary.points,
            terminated = summary.terminated,
            "Episode finished."
        );
        summaries.push(summary);
    }

    env.close();
    Ok(summaries)
}

fn run_vectorized(
    args: &Args,
    config: &EnvConfig,
    layout: &TrackDef,
) -> Result<Vec<EpisodeSummary>> {
    let mut envs = VecEnv::new_with(args.envs, || {
        RaceEnv::with_track(config.clone(), layout.clone())
    })?;
    let mut rng = fastrand::Rng::with_seed(args.seed);
    let mut running = vec![EpisodeSummary::default(); envs.len()];
    let mut summaries = Vec::new();
    let target = usize::try_from(args.episodes).unwrap_or(usize::MAX);

    envs.reset(Some(args.seed));
    let action_size = envs.envs()[0].action_size();
    while summaries.len() < target {
        let actions: Vec<usize> = (0..envs.len()).map(|_| rng.usize(..action_size)).collect();
        for (i, step) in envs.step(&actions)?.iter().enumerate() {
            running[i].record(step);
            if step.is_done() {
                let summary = std::mem::take(&mut running[i]);
                info!(
                    env = i,
                    steps = summary.steps,
                    reward = summary.total_reward,
                    points = summary.points,
                    "Episode finished."
                );
                summaries.push(summary);
            }
        }
    }
    summaries.truncate(target);
    Ok(summaries)
}
