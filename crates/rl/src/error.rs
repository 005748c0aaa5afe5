use thiserror::Error;
use track::TrackError;

/// Ways a caller can break the environment's calling contract. These are
/// bugs in the caller; the environment never recovers from them or clamps
/// the offending input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    #[error("step() called before reset()")]
    NotReset,
    #[error("step() called on a finished episode; call reset() first")]
    EpisodeFinished,
    #[error("action index {index} is outside 0..{count}")]
    InvalidAction { index: usize, count: usize },
    #[error("expected {expected} actions, got {got}")]
    ActionCount { expected: usize, got: usize },
}

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("precondition violated: {0}")]
    PreconditionViolated(#[from] Precondition),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Track(#[from] TrackError),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
