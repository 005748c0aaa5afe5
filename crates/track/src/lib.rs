#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Racetrack Geometry
//!
//! The static world the vehicle drives in. Everything here is plain data plus
//! point-containment queries; nothing in this crate knows about vehicles,
//! rewards or episodes.
//!
//! ## Key Components
//!
//! -   **Geometry:** [`Rect`] is the single primitive. Its half-open
//!     [`Rect::contains`] test is used both for boundary checks and for gate
//!     crossings, so both agree on what "inside" means.
//! -   **Track:** [`Track`] is the drivable surface, the union of its
//!     rectangles.
//! -   **Gates:** [`GateRing`] holds the scoring checkpoints. Gates are
//!     consumed as they are crossed and the ring refills itself from the
//!     track's canonical set.
//! -   **Layouts:** [`TrackDef`] bundles rectangles, gates and the spawn pose.
//!     Definitions can be loaded from JSON, and [`TrackDef::racetrack1`] is the
//!     built-in layout.
//!
//! ```rust
//! use track::TrackDef;
//!
//! let (track, mut gates) = TrackDef::racetrack1().build()?;
//! assert!(track.is_in_bounds(350.0, 100.0));
//! assert_eq!(gates.check_and_score(glam::DVec2::new(555.0, 100.0)), Some(10));
//! # Ok::<(), track::TrackError>(())
//! ```

pub mod error;
pub mod gates;
pub mod geometry;
pub mod layout;
pub mod track;

pub use error::TrackError;
pub use gates::{Gate, GateRing};
pub use geometry::{Pose, Rect};
pub use layout::{GateDef, TrackDef};
pub use track::Track;
