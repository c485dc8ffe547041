use lift_core::ElevatorId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarError {
    #[error("elevator {0} is busy and cannot take a new route")]
    Busy(ElevatorId),

    #[error("cannot dispatch an empty route")]
    EmptyRoute,

    #[error("elevator {0} does not exist")]
    UnknownElevator(ElevatorId),
}

pub type CarResult<T> = Result<T, CarError>;
