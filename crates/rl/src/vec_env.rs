use tracing::debug;

use crate::env::{Env, Step};
use crate::error::{EnvError, Precondition};

/// A batch of independent environments stepped in lockstep.
///
/// Environments never share state. Finished environments are reset
/// immediately after their step, so every call to [`VecEnv::step`] can be
/// followed by another; the finished step keeps its own observation and
/// [`VecEnv::observations`] holds the fresh post-reset one.
pub struct VecEnv<E: Env> {
    envs: Vec<E>,
    obs: Vec<Vec<f32>>,
    seed: Option<u64>,
    episodes: Vec<u64>,
}

impl<E: Env> VecEnv<E> {
    /// Builds `count` environments with `make_env`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfig`] for `count == 0` and forwards any
    /// error from `make_env`.
    pub fn new_with(
        count: usize,
        mut make_env: impl FnMut() -> Result<E, EnvError>,
    ) -> Result<Self, EnvError> {
        if count == 0 {
            return Err(EnvError::InvalidConfig(
                "VecEnv needs at least one environment".to_owned(),
            ));
        }
        let envs = (0..count).map(|_| make_env()).collect::<Result<Vec<_>, _>>()?;
        let obs = envs.iter().map(|e| vec![0.0; e.obs_size()]).collect();
        Ok(Self {
            envs,
            obs,
            seed: None,
            episodes: vec![0; count],
        })
    }

    /// Resets every environment. Environment `i` receives `seed + i`.
    pub fn reset(&mut self, seed: Option<u64>) -> &[Vec<f32>] {
        self.seed = seed;
        for (i, (env, obs)) in self.envs.iter_mut().zip(self.obs.iter_mut()).enumerate() {
            *obs = env.reset(seed.map(|s| s.wrapping_add(i as u64)));
        }
        &self.obs
    }

    /// Steps environment `i` with `actions[i]`, resetting any that finish.
    ///
    /// # Errors
    ///
    /// Returns [`Precondition::ActionCount`] when `actions` does not have one
    /// entry per environment and [`Precondition::InvalidAction`] for an index
    /// outside an environment's action space. Both are checked before any
    /// environment steps, so a rejected batch leaves every environment as it
    /// was. Other per-environment errors are forwarded as they occur.
    pub fn step(&mut self, actions: &[usize]) -> Result<Vec<Step>, EnvError> {
        if actions.len() != self.envs.len() {
            return Err(Precondition::ActionCount {
                expected: self.envs.len(),
                got: actions.len(),
            }
            .into());
        }
        for (env, &index) in self.envs.iter().zip(actions) {
            let count = env.action_size();
            if index >= count {
                return Err(Precondition::InvalidAction { index, count }.into());
            }
        }

        let mut steps = Vec::with_capacity(self.envs.len());
        for (i, env) in self.envs.iter_mut().enumerate() {
            let step = env.step(actions[i])?;
            if step.is_done() {
                self.episodes[i] += 1;
                debug!(env = i, episode = self.episodes[i], "auto-reset");
                self.obs[i] = env.reset(self.seed.map(|s| s.wrapping_add(i as u64)));
            } else {
                self.obs[i].clone_from(&step.observation);
            }
            steps.push(step);
        }
        Ok(steps)
    }

    /// Current observation of every environment.
    #[must_use]
    pub fn observations(&self) -> &[Vec<f32>] {
        &self.obs
    }

    /// Completed episodes per environment.
    #[must_use]
    pub fn episodes(&self) -> &[u64] {
        &self.episodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.envs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }

    #[must_use]
    pub fn envs(&self) -> &[E] {
        &self.envs
    }
}
