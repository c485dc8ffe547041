use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("sequence {name:?} is invalid: {reason}")]
    InvalidSequence { name: String, reason: String },

    #[error("the {0:?} sequence already exists")]
    DuplicateSequence(String),

    #[error("sequence parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] LiftError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TrafficResult<T> = Result<T, TrafficError>;
