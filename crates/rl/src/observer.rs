//! Read-only hooks for renderers and loggers.
//!
//! Observers are strictly downstream of the simulation: they get shared
//! references to post-tick state and cannot change it.

use track::{GateRing, Track};
use vehicle::{SensorReading, Vehicle};

use crate::env::Step;

/// Snapshot of an environment after a reset or step.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub track: &'a Track,
    pub gates: &'a GateRing,
    pub vehicle: &'a Vehicle,
    /// Rays for the vehicle's current pose. After a death these are cast from
    /// the spawn pose, not from where the vehicle crashed.
    pub readings: &'a [SensorReading],
    /// Reward of the last step, 0 right after a reset
    pub reward: f32,
    pub step_count: u32,
}

pub trait EpisodeObserver {
    fn on_reset(&mut self, _frame: &Frame<'_>) {}

    fn on_step(&mut self, frame: &Frame<'_>, step: &Step);
}

