use thiserror::Error;

use crate::geometry::Rect;

/// Problems with a track definition. All of these are raised while a track is
/// being built; a constructed [`crate::Track`] or [`crate::GateRing`] never
/// produces them.
#[derive(Error, Debug)]
pub enum TrackError {
    #[error("track has no rectangles")]
    EmptyTrack,
    #[error("track rectangle {index} is degenerate: {rect:?}")]
    DegenerateRect { index: usize, rect: Rect },
    #[error("track has no gates")]
    NoGates,
    #[error("gate {index} has a degenerate region: {rect:?}")]
    DegenerateGate { index: usize, rect: Rect },
    #[error("gates {first} and {second} share the same region")]
    DuplicateGate { first: usize, second: usize },
    #[error("spawn pose is invalid: {0}")]
    InvalidSpawn(&'static str),
    #[error("failed to parse track definition: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read track definition: {0}")]
    Io(#[from] std::io::Error),
}
