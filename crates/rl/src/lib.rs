#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Racetrack Reinforcement-Learning Environment
//!
//! Wraps the [`track`] and [`vehicle`] crates into an episodic environment
//! with a Gym-style `reset`/`step` contract.
//!
//! ## Key Components
//!
//! -   **[`Env`]:** the interface any learner drives. Actions are discrete
//!     indices, observations are `Vec<f32>`.
//! -   **[`RaceEnv`]:** the episode controller. It maps each [`Action`] onto
//!     vehicle controls, integrates one tick, scores gates, casts the sensor
//!     rays and computes reward, termination and truncation.
//! -   **[`EpisodeObserver`]:** an optional read-only subscriber (a renderer,
//!     a logger) that sees a [`Frame`] after every reset and step.
//! -   **[`VecEnv`]:** N independent environments stepped together with
//!     automatic resets.
//!
//! ## Observation layout
//!
//! The observation holds one distance per sensor ray in the configured
//! angular order (five by default). Building with the `speed-channel` feature
//! appends the vehicle's forward speed as a final element. The layout is
//! fixed for a given build; [`OBS_HAS_SPEED`] reports which one is active.
//!
//! ```rust
//! use rl::{Action, EnvConfig, RaceEnv};
//!
//! let mut env = RaceEnv::new(EnvConfig::default())?;
//! let obs = env.reset(None);
//! assert_eq!(obs.len(), env.obs_size());
//! let step = env.step_action(Action::Forward)?;
//! assert!(!step.terminated);
//! # Ok::<(), rl::EnvError>(())
//! ```

pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod observer;
pub mod race;
pub mod vec_env;

pub use action::Action;
pub use config::{EnvConfig, RewardConfig};
pub use env::{Env, Step, StepInfo};
pub use error::{EnvError, Precondition};
pub use observer::{EpisodeObserver, Frame};
pub use race::{Phase, RaceEnv};
pub use vec_env::VecEnv;

/// Whether observations carry a trailing speed channel in this build.
pub const OBS_HAS_SPEED: bool = cfg!(feature = "speed-channel");
