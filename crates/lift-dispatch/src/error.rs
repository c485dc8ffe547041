use lift_core::ElevatorId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("cannot assign an empty route")]
    EmptyRoute,

    #[error("dispatcher selected {0}, which is not in the fleet")]
    UnknownElevator(ElevatorId),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
