//! The per-car state machine.

use lift_core::Tick;

use crate::StepSchedule;

/// An elevator is either **idle** (assignable) or **busy** (serving a route).
///
/// Transitions happen only through the clock's phases:
///
/// ```text
/// Idle --begin_trip (dispatch)--> Busy { available_at, schedule }
/// Busy --release_if_due (now >= available_at)--> Idle
/// ```
///
/// The schedule exists only inside `Busy`, so it is dropped on release by
/// construction.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum CarState {
    #[default]
    Idle,
    Busy {
        /// Tick at which the car becomes assignable again.
        available_at: Tick,
        /// Labels for every second of the current trip.
        schedule: StepSchedule,
    },
}

impl CarState {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, CarState::Idle)
    }
}
