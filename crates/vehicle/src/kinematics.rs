//! # Vehicle Kinematics
//!
//! Forward speed is a scalar in `[0, max_forward_speed]`; there is no reverse
//! gear, no slip and no mass. Control calls only change speed or heading.
//! Position changes exclusively in [`Vehicle::advance`], so a tick's controls
//! are always applied before its integration step.

use glam::DVec2;
use track::Pose;

use crate::config::VehicleConfig;

/// Length of the drawn body along the heading.
pub const BODY_LENGTH: f64 = 40.0;
/// Width of the drawn body across the heading.
pub const BODY_WIDTH: f64 = 20.0;

#[derive(Clone, Debug)]
pub struct Vehicle {
    position: DVec2,
    heading: f64,
    forward_speed: f64,
    accumulated_points: i64,
    spawn: Pose,
    config: VehicleConfig,
}

impl Vehicle {
    /// Creates a vehicle resting at `spawn`.
    #[must_use]
    pub fn new(spawn: Pose, config: VehicleConfig) -> Self {
        Self {
            position: spawn.position,
            heading: spawn.heading,
            forward_speed: 0.0,
            accumulated_points: 0,
            spawn,
            config,
        }
    }

    /// Back to the spawn pose, stationary, with no points.
    pub fn reset(&mut self) {
        self.position = self.spawn.position;
        self.heading = self.spawn.heading;
        self.forward_speed = 0.0;
        self.accumulated_points = 0;
    }

    pub fn accelerate(&mut self) {
        self.forward_speed =
            (self.forward_speed + self.config.acceleration_step).min(self.config.max_forward_speed);
    }

    /// Bleeds off one acceleration step of speed, stopping at zero.
    pub fn decelerate_to_zero(&mut self) {
        self.forward_speed = (self.forward_speed - self.config.acceleration_step).max(0.0);
    }

    pub fn turn_left(&mut self) {
        self.heading -= self.config.turn_step_degrees;
    }

    pub fn turn_right(&mut self) {
        self.heading += self.config.turn_step_degrees;
    }

    /// Integrates one tick of motion along the current heading.
    ///
    /// With `stop` set the vehicle halts in place instead; this is the
    /// shutdown path, not a driving control.
    pub fn advance(&mut self, stop: bool) {
        if stop {
            self.forward_speed = 0.0;
        } else {
            self.position += self.direction() * self.forward_speed;
        }
    }

    /// Adds scored gate points.
    pub fn credit(&mut self, points: i32) {
        self.accumulated_points += i64::from(points);
    }

    /// Unit vector along the heading.
    #[must_use]
    pub fn direction(&self) -> DVec2 {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        DVec2::new(cos, sin)
    }

    /// Corners of the body rectangle rotated to the current heading, in
    /// drawing order. Purely cosmetic: collisions use the centre point only.
    #[must_use]
    pub fn corners(&self) -> [DVec2; 4] {
        let forward = self.direction();
        let side = forward.perp();
        let hl = BODY_LENGTH * 0.5;
        let hw = BODY_WIDTH * 0.5;
        [(-hl, -hw), (hl, -hw), (hl, hw), (-hl, hw)]
            .map(|(l, w)| self.position + forward * l + side * w)
    }

    #[must_use]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[must_use]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[must_use]
    pub fn forward_speed(&self) -> f64 {
        self.forward_speed
    }

    #[must_use]
    pub fn accumulated_points(&self) -> i64 {
        self.accumulated_points
    }

    #[must_use]
    pub fn spawn(&self) -> Pose {
        self.spawn
    }

    #[must_use]
    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    /// Teleports the vehicle without touching speed or points.
    #[cfg(test)]
    pub(crate) fn place(&mut self, pose: Pose) {
        self.position = pose.position;
        self.heading = pose.heading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle() -> Vehicle {
        Vehicle::new(Pose::default(), VehicleConfig::default())
    }

    #[test]
    fn speed_never_exceeds_max() {
        let mut v = vehicle();
        for _ in 0..200 {
            v.accelerate();
            assert!(v.forward_speed() <= v.config().max_forward_speed);
        }
        assert!((v.forward_speed() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn speed_never_goes_negative() {
        let mut v = vehicle();
        for _ in 0..7 {
            v.accelerate();
        }
        for _ in 0..50 {
            v.decelerate_to_zero();
            assert!(v.forward_speed() >= 0.0);
        }
        assert_eq!(v.forward_speed(), 0.0);
    }

    #[test]
    fn turning_changes_heading_only() {
        let mut v = vehicle();
        v.accelerate();
        v.turn_left();
        v.turn_left();
        v.turn_right();
        assert!((v.heading() + 3.0).abs() < 1e-12);
        assert!((v.forward_speed() - 0.1).abs() < 1e-12);
        assert_eq!(v.position(), Pose::default().position);
    }

    #[test]
    fn advance_moves_along_heading() {
        let mut v = vehicle();
        v.place(Pose::new(DVec2::new(0.0, 0.0), 90.0));
        for _ in 0..10 {
            v.accelerate();
        }
        v.advance(false);
        let p = v.position();
        assert!(p.x.abs() < 1e-9, "x drifted to {}", p.x);
        assert!((p.y - 1.0).abs() < 1e-9, "expected y = 1, got {}", p.y);
    }

    #[test]
    fn hard_stop_keeps_position() {
        let mut v = vehicle();
        v.accelerate();
        let before = v.position();
        v.advance(true);
        assert_eq!(v.forward_speed(), 0.0);
        assert_eq!(v.position(), before);
    }

    #[test]
    fn reset_restores_spawn_and_clears_points() {
        let mut v = vehicle();
        v.accelerate();
        v.turn_right();
        v.advance(false);
        v.credit(10);
        v.reset();
        assert_eq!(v.position(), DVec2::new(350.0, 100.0));
        assert_eq!(v.heading(), 0.0);
        assert_eq!(v.forward_speed(), 0.0);
        assert_eq!(v.accumulated_points(), 0);
    }

    #[test]
    fn corners_span_the_body() {
        let v = vehicle();
        let c = v.corners();
        assert!((c[1].x - c[0].x - BODY_LENGTH).abs() < 1e-9);
        assert!((c[3].y - c[0].y - BODY_WIDTH).abs() < 1e-9);
    }
}
