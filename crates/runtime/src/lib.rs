#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Race Runtime
//!
//! Headless driver for the racetrack environment. It stands in for a
//! learning algorithm: a seeded uniformly random policy plays episodes
//! through the public `reset`/`step` contract, and a logging observer reports
//! progress the way a renderer would consume frames.
//!
//! With `--watch`, edits to the `--track` file are picked up at the next
//! episode boundary so layouts can be iterated on without restarting.

pub mod app;
pub mod cli;
pub mod observer;
pub mod watcher;
