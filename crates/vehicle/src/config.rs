use serde::{Deserialize, Serialize};

/// Tunable kinematic constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    /// Upper bound on forward speed, in track units per tick
    pub max_forward_speed: f64,
    /// Speed change per accelerate or decelerate call
    pub acceleration_step: f64,
    /// Heading change per turn call, in degrees
    pub turn_step_degrees: f64,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            max_forward_speed: 5.0,
            acceleration_step: 0.1,
            turn_step_degrees: 3.0,
        }
    }
}

/// Ray layout of the sensor array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Longest distance a ray reports, in whole track units
    pub max_range: u32,
    /// Ray directions in degrees relative to the vehicle heading, in output order
    pub angle_offsets: Vec<f64>,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            max_range: 400,
            angle_offsets: vec![-45.0, -22.5, 0.0, 22.5, 45.0],
        }
    }
}
