//! Environment configuration. Every field has a default, so a JSON file only
//! needs to name what it changes:
//!
//! ```json
//! { "max_episode_steps": 500, "vehicle": { "max_forward_speed": 3.0 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use vehicle::{SensorConfig, VehicleConfig};

use crate::error::EnvError;

/// Reward shaping constants. These are starting values, not derived ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Reward for crossing a gate that raises the vehicle's points
    pub gate_multiplier: f32,
    /// Subtracted every tick
    pub tick_cost: f32,
    /// Subtracted on the tick the vehicle leaves the track
    pub out_of_bounds_penalty: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            gate_multiplier: 10.0,
            tick_cost: 0.01,
            out_of_bounds_penalty: 5.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Steps per episode before truncation
    pub max_episode_steps: u32,
    pub vehicle: VehicleConfig,
    pub sensor: SensorConfig,
    pub reward: RewardConfig,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            max_episode_steps: 1000,
            vehicle: VehicleConfig::default(),
            sensor: SensorConfig::default(),
            reward: RewardConfig::default(),
        }
    }
}

impl EnvConfig {
    /// # Errors
    ///
    /// Returns [`EnvError::Parse`] on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, EnvError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns [`EnvError::Io`] if the file cannot be read and
    /// [`EnvError::Parse`] on malformed JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EnvError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Rejects values that would make an episode meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), EnvError> {
        let invalid = |msg: &str| Err(EnvError::InvalidConfig(msg.to_owned()));
        let v = &self.vehicle;
        if self.max_episode_steps == 0 {
            return invalid("max_episode_steps must be at least 1");
        }
        if !(v.max_forward_speed.is_finite() && v.max_forward_speed > 0.0) {
            return invalid("vehicle.max_forward_speed must be positive");
        }
        if !(v.acceleration_step.is_finite() && v.acceleration_step > 0.0) {
            return invalid("vehicle.acceleration_step must be positive");
        }
        if !v.turn_step_degrees.is_finite() {
            return invalid("vehicle.turn_step_degrees must be finite");
        }
        if self.sensor.max_range == 0 {
            return invalid("sensor.max_range must be at least 1");
        }
        if self.sensor.angle_offsets.is_empty() {
            return invalid("sensor.angle_offsets must not be empty");
        }
        if self.sensor.angle_offsets.iter().any(|a| !a.is_finite()) {
            return invalid("sensor.angle_offsets must be finite");
        }
        let r = &self.reward;
        if ![r.gate_multiplier, r.tick_cost, r.out_of_bounds_penalty]
            .iter()
            .all(|x| x.is_finite())
        {
            return invalid("reward constants must be finite");
        }
        Ok(())
    }
}
