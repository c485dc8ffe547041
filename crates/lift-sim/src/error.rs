use lift_car::CarError;
use lift_core::{ElevatorId, LiftError};
use lift_dispatch::DispatchError;
use lift_traffic::TrafficError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] LiftError),

    #[error(transparent)]
    Traffic(#[from] TrafficError),

    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("car error: {0}")]
    Car(#[from] CarError),

    #[error("assignment names {0}, which is not in the fleet")]
    UnknownElevator(ElevatorId),
}

pub type SimResult<T> = Result<T, SimError>;
