#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Vehicle Kinematics and Sensing
//!
//! A deliberately simple kinematic car and the ray-cast sensors it carries.
//!
//! -   [`Vehicle`] exposes primitive controls (accelerate, brake, turn) and a
//!     separate [`Vehicle::advance`] integration step. Mapping agent actions
//!     onto these primitives is left to the caller.
//! -   [`SensorArray`] marches rays outward from the vehicle until they leave
//!     the [`track::Track`], producing the distance readings that make up an
//!     observation.

pub mod config;
pub mod kinematics;
pub mod sensor;

pub use config::{SensorConfig, VehicleConfig};
pub use kinematics::Vehicle;
pub use sensor::{SensorArray, SensorReading};
