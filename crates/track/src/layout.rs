//! # Track Layouts
//!
//! A [`TrackDef`] is the serialisable description of a track: its surface
//! rectangles, the canonical gate set and where the vehicle spawns. Layouts
//! are plugged in either from JSON or from a built-in constructor such as
//! [`TrackDef::racetrack1`].
//!
//! ```json
//! {
//!   "name": "straight",
//!   "rects": [{ "x": 0, "y": 0, "width": 500, "height": 100 }],
//!   "gates": [{ "region": { "x": 200, "y": 0, "width": 10, "height": 100 } }],
//!   "spawn": { "position": [50, 50], "heading": 0 }
//! }
//! ```

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::TrackError;
use crate::gates::{Gate, GateRing};
use crate::geometry::{Pose, Rect};
use crate::track::Track;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GateDef {
    pub region: Rect,
    #[serde(default = "default_gate_value")]
    pub value: i32,
}

fn default_gate_value() -> i32 {
    10
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackDef {
    #[serde(default)]
    pub name: String,
    pub rects: Vec<Rect>,
    pub gates: Vec<GateDef>,
    #[serde(default)]
    pub spawn: Pose,
}

impl TrackDef {
    /// Parses a layout from JSON. The result is not validated until
    /// [`TrackDef::build`].
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::Parse`] on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, TrackError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a layout file.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::Io`] if the file cannot be read and
    /// [`TrackError::Parse`] on malformed JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TrackError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validates the layout and produces a fresh track and full gate ring.
    ///
    /// # Errors
    ///
    /// Propagates the geometry errors of [`Track::new`] and [`GateRing::new`],
    /// and rejects a spawn pose that is non-finite or off the track.
    pub fn build(&self) -> Result<(Track, GateRing), TrackError> {
        let track = Track::new(self.rects.clone())?;
        let gates = GateRing::new(
            self.gates
                .iter()
                .map(|g| Gate::new(g.region, g.value))
                .collect(),
        )?;
        let Pose { position, heading } = self.spawn;
        if !position.is_finite() || !heading.is_finite() {
            return Err(TrackError::InvalidSpawn("non-finite spawn pose"));
        }
        if !track.is_in_bounds(position.x, position.y) {
            return Err(TrackError::InvalidSpawn("spawn position is off the track"));
        }
        Ok((track, gates))
    }

    /// The default twelve-segment circuit with twelve gates worth 10 each.
    #[must_use]
    pub fn racetrack1() -> Self {
        let rects = vec![
            Rect::new(50.0, 50.0, 1100.0, 100.0),
            Rect::new(1050.0, 50.0, 100.0, 400.0),
            Rect::new(850.0, 350.0, 200.0, 100.0),
            Rect::new(850.0, 450.0, 100.0, 200.0),
            Rect::new(650.0, 350.0, 100.0, 200.0),
            Rect::new(650.0, 550.0, 200.0, 100.0),
            Rect::new(350.0, 350.0, 300.0, 100.0),
            Rect::new(350.0, 450.0, 100.0, 300.0),
            Rect::new(150.0, 650.0, 200.0, 100.0),
            Rect::new(50.0, 150.0, 100.0, 200.0),
            Rect::new(75.0, 350.0, 50.0, 100.0),
            Rect::new(50.0, 450.0, 100.0, 300.0),
        ];
        let gates = [
            Rect::new(550.0, 50.0, 10.0, 100.0),
            Rect::new(750.0, 50.0, 10.0, 100.0),
            Rect::new(950.0, 50.0, 10.0, 100.0),
            Rect::new(1050.0, 250.0, 100.0, 10.0),
            Rect::new(1000.0, 350.0, 10.0, 100.0),
            Rect::new(850.0, 500.0, 100.0, 10.0),
            Rect::new(800.0, 550.0, 10.0, 100.0),
            Rect::new(650.0, 500.0, 100.0, 10.0),
            Rect::new(550.0, 350.0, 10.0, 100.0),
            Rect::new(350.0, 600.0, 100.0, 10.0),
            Rect::new(50.0, 600.0, 100.0, 10.0),
            Rect::new(50.0, 200.0, 100.0, 10.0),
        ]
        .into_iter()
        .map(|region| GateDef { region, value: 10 })
        .collect();

        Self {
            name: "racetrack1".to_owned(),
            rects,
            gates,
            spawn: Pose::new(DVec2::new(350.0, 100.0), 0.0),
        }
    }
}

impl Default for TrackDef {
    fn default() -> Self {
        Self::racetrack1()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn racetrack1_builds() {
        let (track, gates) = TrackDef::racetrack1().build().unwrap();
        assert_eq!(track.rects().len(), 12);
        assert_eq!(gates.len(), 12);
        assert!(track.is_in_bounds(350.0, 100.0));
    }

    #[test]
    fn every_racetrack1_gate_lies_on_the_track() {
        let (track, gates) = TrackDef::racetrack1().build().unwrap();
        for gate in gates.active() {
            let c = gate.region.center();
            assert!(track.is_in_bounds(c.x, c.y), "gate {gate:?} is off the track");
        }
    }

    #[test]
    fn off_track_spawn_is_rejected() {
        let mut def = TrackDef::racetrack1();
        def.spawn = Pose::new(DVec2::new(0.0, 0.0), 0.0);
        assert!(matches!(def.build(), Err(TrackError::InvalidSpawn(_))));
    }
}
