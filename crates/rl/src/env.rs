use crate::error::EnvError;

/// Reinforcement learning environment trait.
///
/// Modelled on the Gymnasium contract: [`reset`] starts an episode and
/// returns the first observation, [`step`] advances it by one discrete action.
/// An episode ends when a step reports `terminated` (the task failed) or
/// `truncated` (the step budget ran out); the two are independent.
///
/// [`reset`]: Env::reset
/// [`step`]: Env::step
pub trait Env {
    /// Start a new episode and return its initial observation.
    ///
    /// `seed` is accepted for interface stability; deterministic
    /// environments may ignore it.
    fn reset(&mut self, seed: Option<u64>) -> Vec<f32>;

    /// Advance the environment by the action with index `action`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::PreconditionViolated`] when `action` is out of
    /// range or no episode is in progress.
    fn step(&mut self, action: usize) -> Result<Step, EnvError>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Number of discrete actions.
    fn action_size(&self) -> usize;
}

/// Result of one [`Env::step`].
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub observation: Vec<f32>,
    pub reward: f32,
    pub terminated: bool,
    pub truncated: bool,
    pub info: StepInfo,
}

impl Step {
    /// The episode is over and the environment needs a reset.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }
}

/// Diagnostics that are not part of the observation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepInfo {
    /// Gate value collected this tick
    pub points_scored: Option<i32>,
    /// Points held by the vehicle at the end of the tick (zero after a respawn)
    pub total_points: i64,
    /// Steps taken in this episode, including this one
    pub step_count: u32,
    /// Copy of the observation on a terminating step
    pub terminal_observation: Option<Vec<f32>>,
}
