//! # Ray-cast Sensors
//!
//! Each ray walks away from the vehicle in unit steps and stops at the first
//! sample that falls off the track. The result is only accurate to one track
//! unit, which is all the agent gets to see.

use glam::DVec2;
use track::Track;

use crate::config::SensorConfig;
use crate::kinematics::Vehicle;

/// One ray's result.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SensorReading {
    /// Distance to the first off-track sample, or the maximum range
    pub distance: f64,
    /// Where the ray stopped
    pub end: DVec2,
}

#[derive(Clone, Debug)]
pub struct SensorArray {
    angle_offsets: Vec<f64>,
    max_range: u32,
}

impl SensorArray {
    #[must_use]
    pub fn new(config: &SensorConfig) -> Self {
        Self {
            angle_offsets: config.angle_offsets.clone(),
            max_range: config.max_range,
        }
    }

    /// Casts a single ray from `origin` along `angle_degrees`.
    #[must_use]
    pub fn cast(&self, track: &Track, origin: DVec2, angle_degrees: f64) -> SensorReading {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        let dir = DVec2::new(cos, sin);
        for step in 1..=self.max_range {
            let distance = f64::from(step);
            let end = origin + dir * distance;
            if !track.is_in_bounds(end.x, end.y) {
                return SensorReading { distance, end };
            }
        }
        let distance = f64::from(self.max_range);
        SensorReading {
            distance,
            end: origin + dir * distance,
        }
    }

    /// Readings for every ray, in the configured angular order.
    #[must_use]
    pub fn sample(&self, track: &Track, vehicle: &Vehicle) -> Vec<SensorReading> {
        self.angle_offsets
            .iter()
            .map(|offset| self.cast(track, vehicle.position(), vehicle.heading() + offset))
            .collect()
    }

    /// Number of rays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.angle_offsets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.angle_offsets.is_empty()
    }

    #[must_use]
    pub fn max_range(&self) -> u32 {
        self.max_range
    }

    #[must_use]
    pub fn angle_offsets(&self) -> &[f64] {
        &self.angle_offsets
    }
}
