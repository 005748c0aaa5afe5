//! # Episode Controller
//!
//! [`RaceEnv`] owns one vehicle on one track and runs the per-tick pipeline:
//!
//! 1. map the [`Action`] onto vehicle controls,
//! 2. integrate one tick of motion,
//! 3. score at most one gate,
//! 4. cast the sensor rays,
//! 5. compute the reward and the termination and truncation flags.
//!
//! Leaving the track terminates the episode and respawns the vehicle, but the
//! observation returned for that step is the one taken off-track. Every
//! instance owns all of its state, so independent instances can run on
//! separate threads.

use tracing::{debug, trace};
use track::{GateRing, Track, TrackDef};
use vehicle::{SensorArray, SensorReading, Vehicle};

use crate::action::Action;
use crate::config::EnvConfig;
use crate::env::{Env, Step, StepInfo};
use crate::error::{EnvError, Precondition};
use crate::observer::{EpisodeObserver, Frame};
use crate::OBS_HAS_SPEED;

/// Lifecycle of the current episode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Constructed but never reset
    Unstarted,
    /// Freshly reset, no step taken yet
    Ready,
    Active,
    /// Left the track; absorbing until the next reset
    Terminated,
    /// Ran out of steps; absorbing until the next reset
    Truncated,
}

#[derive(Clone, Debug, Default)]
struct EpisodeState {
    step_count: u32,
    last_scored_points: i64,
    last_reward: f32,
    terminated: bool,
    truncated: bool,
}

pub struct RaceEnv {
    config: EnvConfig,
    layout: TrackDef,
    track: Track,
    gates: GateRing,
    vehicle: Vehicle,
    sensors: SensorArray,
    readings: Vec<SensorReading>,
    state: EpisodeState,
    phase: Phase,
}

impl RaceEnv {
    /// Creates an environment on the built-in `racetrack1` layout.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        Self::with_track(config, TrackDef::racetrack1())
    }

    /// Creates an environment on a custom layout.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfig`] for a bad config and
    /// [`EnvError::Track`] for a degenerate layout.
    pub fn with_track(config: EnvConfig, layout: TrackDef) -> Result<Self, EnvError> {
        config.validate()?;
        let (track, gates) = layout.build()?;
        let vehicle = Vehicle::new(layout.spawn, config.vehicle.clone());
        let sensors = SensorArray::new(&config.sensor);
        let readings = sensors.sample(&track, &vehicle);
        Ok(Self {
            config,
            layout,
            track,
            gates,
            vehicle,
            sensors,
            readings,
            state: EpisodeState::default(),
            phase: Phase::Unstarted,
        })
    }

    /// Starts a new episode at the spawn pose with a full gate ring.
    ///
    /// The track is fixed, so `seed` has no effect on the result; two resets
    /// in a row always yield the same observation.
    pub fn reset(&mut self, seed: Option<u64>) -> Vec<f32> {
        debug!(?seed, track = %self.layout.name, "episode reset");
        self.vehicle.reset();
        self.gates.regenerate();
        self.state = EpisodeState::default();
        self.phase = Phase::Ready;
        self.readings = self.sensors.sample(&self.track, &self.vehicle);
        self.observation()
    }

    /// Runs one tick with a typed action.
    ///
    /// # Errors
    ///
    /// Returns [`Precondition::NotReset`] before the first reset and
    /// [`Precondition::EpisodeFinished`] once the episode has terminated or
    /// been truncated.
    pub fn step_action(&mut self, action: Action) -> Result<Step, EnvError> {
        match self.phase {
            Phase::Unstarted => return Err(Precondition::NotReset.into()),
            Phase::Terminated | Phase::Truncated => {
                return Err(Precondition::EpisodeFinished.into());
            }
            Phase::Ready | Phase::Active => {}
        }

        self.apply_controls(action);
        self.vehicle.advance(false);
        let points_scored = self.gates.check_and_score(self.vehicle.position());
        if let Some(value) = points_scored {
            self.vehicle.credit(value);
        }

        self.readings = self.sensors.sample(&self.track, &self.vehicle);
        let observation = self.observation();
        let position = self.vehicle.position();
        let out_of_bounds = !self.track.is_in_bounds(position.x, position.y);
        let reward = self.compute_reward(out_of_bounds);
        self.state.last_reward = reward;

        let mut terminal_observation = None;
        if out_of_bounds {
            self.state.terminated = true;
            terminal_observation = Some(observation.clone());
            self.on_death();
        }

        self.state.step_count += 1;
        if self.state.step_count >= self.config.max_episode_steps {
            self.state.truncated = true;
        }

        self.phase = if self.state.terminated {
            Phase::Terminated
        } else if self.state.truncated {
            Phase::Truncated
        } else {
            Phase::Active
        };

        trace!(
            step = self.state.step_count,
            ?action,
            reward,
            x = position.x,
            y = position.y,
            "tick"
        );

        Ok(Step {
            observation,
            reward,
            terminated: self.state.terminated,
            truncated: self.state.truncated,
            info: StepInfo {
                points_scored,
                total_points: self.vehicle.accumulated_points(),
                step_count: self.state.step_count,
                terminal_observation,
            },
        })
    }

    /// [`RaceEnv::reset`], then notify `observer`.
    pub fn reset_observed(
        &mut self,
        seed: Option<u64>,
        observer: &mut impl EpisodeObserver,
    ) -> Vec<f32> {
        let obs = self.reset(seed);
        observer.on_reset(&self.frame());
        obs
    }

    /// [`RaceEnv::step_action`], then notify `observer` with the post-tick
    /// frame. The observer is not called when the step is rejected.
    ///
    /// # Errors
    ///
    /// Same as [`RaceEnv::step_action`].
    pub fn step_observed(
        &mut self,
        action: Action,
        observer: &mut impl EpisodeObserver,
    ) -> Result<Step, EnvError> {
        let step = self.step_action(action)?;
        observer.on_step(&self.frame(), &step);
        Ok(step)
    }

    /// Brings the vehicle to a hard stop. Used when shutting down.
    pub fn close(&mut self) {
        self.vehicle.advance(true);
    }

    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            track: &self.track,
            gates: &self.gates,
            vehicle: &self.vehicle,
            readings: &self.readings,
            reward: self.state.last_reward,
            step_count: self.state.step_count,
        }
    }

    #[must_use]
    pub fn obs_size(&self) -> usize {
        self.sensors.len() + usize::from(OBS_HAS_SPEED)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn step_count(&self) -> u32 {
        self.state.step_count
    }

    #[must_use]
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    #[must_use]
    pub fn gates(&self) -> &GateRing {
        &self.gates
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &TrackDef {
        &self.layout
    }

    fn apply_controls(&mut self, action: Action) {
        let v = &mut self.vehicle;
        match action {
            Action::TurnLeft => {
                v.turn_left();
                v.decelerate_to_zero();
            }
            Action::Forward => v.accelerate(),
            Action::TurnRight => {
                v.turn_right();
                v.decelerate_to_zero();
            }
            Action::TurnLeftForward => {
                v.turn_left();
                v.accelerate();
            }
            Action::TurnRightForward => {
                v.turn_right();
                v.accelerate();
            }
            Action::Backward | Action::Brake => v.decelerate_to_zero(),
        }
    }

    fn compute_reward(&mut self, out_of_bounds: bool) -> f32 {
        let r = &self.config.reward;
        let mut reward = 0.0;

        // At most one gate scores per tick, so a rise in points is one gate crossed.
        let current = self.vehicle.accumulated_points();
        if current > self.state.last_scored_points {
            reward += r.gate_multiplier;
            self.state.last_scored_points = current;
        }

        reward -= r.tick_cost;

        if out_of_bounds {
            reward -= r.out_of_bounds_penalty;
        }
        reward
    }

    fn on_death(&mut self) {
        let p = self.vehicle.position();
        debug!(
            step = self.state.step_count + 1,
            points = self.vehicle.accumulated_points(),
            "vehicle left the track at ({:.1}, {:.1}); respawning",
            p.x,
            p.y
        );
        self.vehicle.reset();
        self.vehicle.advance(true);
        self.gates.regenerate();
        // Points restart from zero with the vehicle, so the scoring baseline must too.
        self.state.last_scored_points = 0;
        self.readings = self.sensors.sample(&self.track, &self.vehicle);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn observation(&self) -> Vec<f32> {
        let mut obs: Vec<f32> = self.readings.iter().map(|r| r.distance as f32).collect();
        if OBS_HAS_SPEED {
            obs.push(self.vehicle.forward_speed() as f32);
        }
        obs
    }
}

impl Env for RaceEnv {
    fn reset(&mut self, seed: Option<u64>) -> Vec<f32> {
        RaceEnv::reset(self, seed)
    }

    fn step(&mut self, action: usize) -> Result<Step, EnvError> {
        let action = Action::try_from(action)?;
        self.step_action(action)
    }

    fn obs_size(&self) -> usize {
        RaceEnv::obs_size(self)
    }

    fn action_size(&self) -> usize {
        Action::COUNT
    }
}
